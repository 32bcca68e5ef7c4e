//! sqlc plugin protocol messages.
//!
//! Hand-written [`prost`] definitions for the subset of `plugin/codegen.proto`
//! that sqlts reads. Fields not declared here (settings, catalog, table
//! metadata) are skipped by the decoder.

use prost::Message;

use crate::{Column, Command, GenerateRequest, GenerateResponse, Parameter, Query, UnknownCommand};

/// Errors raised while converting between the wire format and the IR.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("request is not a valid GenerateRequest message")]
    Decode(#[from] prost::DecodeError),

    #[error("query '{query}' has an {source}")]
    Command {
        query: String,
        #[source]
        source: UnknownCommand,
    },
}

#[derive(Clone, PartialEq, Message)]
pub struct File {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(bytes = "vec", tag = "2")]
    pub contents: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Identifier {
    #[prost(string, tag = "1")]
    pub catalog: String,
    #[prost(string, tag = "2")]
    pub schema: String,
    #[prost(string, tag = "3")]
    pub name: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct WireColumn {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(bool, tag = "3")]
    pub not_null: bool,
    #[prost(bool, tag = "4")]
    pub is_array: bool,
    #[prost(message, optional, tag = "12")]
    pub r#type: Option<Identifier>,
    #[prost(int32, tag = "17")]
    pub array_dims: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct WireParameter {
    #[prost(int32, tag = "1")]
    pub number: i32,
    #[prost(message, optional, tag = "2")]
    pub column: Option<WireColumn>,
}

#[derive(Clone, PartialEq, Message)]
pub struct WireQuery {
    #[prost(string, tag = "1")]
    pub text: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub cmd: String,
    #[prost(message, repeated, tag = "4")]
    pub columns: Vec<WireColumn>,
    #[prost(message, repeated, tag = "5")]
    pub params: Vec<WireParameter>,
    #[prost(string, tag = "7")]
    pub filename: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct WireGenerateRequest {
    #[prost(message, repeated, tag = "3")]
    pub queries: Vec<WireQuery>,
    #[prost(string, tag = "4")]
    pub sqlc_version: String,
    #[prost(bytes = "vec", tag = "5")]
    pub plugin_options: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct WireGenerateResponse {
    #[prost(message, repeated, tag = "1")]
    pub files: Vec<File>,
}

/// Decode a protobuf-encoded `GenerateRequest` into the IR.
pub fn decode_request(bytes: &[u8]) -> Result<GenerateRequest, WireError> {
    let request = WireGenerateRequest::decode(bytes)?;
    GenerateRequest::try_from(request)
}

/// Encode a response as a protobuf `GenerateResponse`.
pub fn encode_response(response: &GenerateResponse) -> Vec<u8> {
    WireGenerateResponse::from(response).encode_to_vec()
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

impl From<WireColumn> for Column {
    fn from(column: WireColumn) -> Self {
        let ty = column.r#type.and_then(|id| {
            if id.name.is_empty() {
                None
            } else if id.schema.is_empty() {
                Some(id.name)
            } else {
                Some(format!("{}.{}", id.schema, id.name))
            }
        });

        Column {
            name: non_empty(column.name),
            ty,
            not_null: column.not_null,
            is_array: column.is_array,
            array_dims: u32::try_from(column.array_dims).unwrap_or(0),
        }
    }
}

impl From<WireParameter> for Parameter {
    fn from(param: WireParameter) -> Self {
        Parameter {
            number: u32::try_from(param.number).unwrap_or(0),
            column: param.column.map(Column::from),
        }
    }
}

impl TryFrom<WireQuery> for Query {
    type Error = WireError;

    fn try_from(query: WireQuery) -> Result<Self, Self::Error> {
        let cmd: Command = query.cmd.parse().map_err(|source| WireError::Command {
            query: query.name.clone(),
            source,
        })?;

        Ok(Query {
            name: query.name,
            cmd,
            text: query.text,
            filename: query.filename,
            params: query.params.into_iter().map(Parameter::from).collect(),
            columns: query.columns.into_iter().map(Column::from).collect(),
        })
    }
}

impl TryFrom<WireGenerateRequest> for GenerateRequest {
    type Error = WireError;

    fn try_from(request: WireGenerateRequest) -> Result<Self, Self::Error> {
        let queries = request
            .queries
            .into_iter()
            .map(Query::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GenerateRequest {
            queries,
            plugin_options: request.plugin_options,
        })
    }
}

impl From<&GenerateResponse> for WireGenerateResponse {
    fn from(response: &GenerateResponse) -> Self {
        WireGenerateResponse {
            files: response
                .files
                .iter()
                .map(|f| File {
                    name: f.name.clone(),
                    contents: f.contents.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeneratedFile;

    fn wire_column(name: &str, schema: &str, ty: &str) -> WireColumn {
        WireColumn {
            name: name.to_string(),
            not_null: true,
            is_array: false,
            r#type: Some(Identifier {
                catalog: String::new(),
                schema: schema.to_string(),
                name: ty.to_string(),
            }),
            array_dims: 0,
        }
    }

    fn wire_request(cmd: &str) -> WireGenerateRequest {
        WireGenerateRequest {
            queries: vec![WireQuery {
                text: "SELECT id FROM authors WHERE id = $1".to_string(),
                name: "GetAuthor".to_string(),
                cmd: cmd.to_string(),
                columns: vec![wire_column("id", "pg_catalog", "int8")],
                params: vec![WireParameter {
                    number: 1,
                    column: Some(wire_column("id", "", "int8")),
                }],
                filename: "query.sql".to_string(),
            }],
            sqlc_version: "v1.27.0".to_string(),
            plugin_options: br#"{"driver":"pg"}"#.to_vec(),
        }
    }

    #[test]
    fn test_decode_request() {
        let bytes = wire_request(":one").encode_to_vec();
        let request = decode_request(&bytes).unwrap();

        assert_eq!(request.plugin_options, br#"{"driver":"pg"}"#.to_vec());
        let query = &request.queries[0];
        assert_eq!(query.name, "GetAuthor");
        assert_eq!(query.cmd, Command::One);
        assert_eq!(query.filename, "query.sql");
        assert_eq!(query.columns[0].ty.as_deref(), Some("pg_catalog.int8"));
        assert_eq!(query.params[0].number, 1);
        assert_eq!(
            query.params[0].column.as_ref().and_then(|c| c.ty.as_deref()),
            Some("int8")
        );
    }

    #[test]
    fn test_empty_strings_become_absent() {
        let column = Column::from(WireColumn {
            name: String::new(),
            not_null: false,
            is_array: true,
            r#type: Some(Identifier::default()),
            array_dims: -1,
        });
        assert_eq!(column.name, None);
        assert_eq!(column.ty, None);
        assert_eq!(column.array_dims, 0);
        assert!(column.is_array);
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        let bytes = wire_request(":copyfrom").encode_to_vec();
        let err = decode_request(&bytes).unwrap_err();
        assert!(matches!(err, WireError::Command { ref query, .. } if query == "GetAuthor"));
        assert_eq!(
            err.to_string(),
            "query 'GetAuthor' has an unknown command ':copyfrom'"
        );
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        let err = decode_request(&[0xff]).unwrap_err();
        assert!(matches!(err, WireError::Decode(_)));
    }

    #[test]
    fn test_encode_response() {
        let response = GenerateResponse {
            files: vec![GeneratedFile::new("query_sql.ts", "export {};\n")],
        };
        let bytes = encode_response(&response);
        let decoded = WireGenerateResponse::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded.files.len(), 1);
        assert_eq!(decoded.files[0].name, "query_sql.ts");
        assert_eq!(decoded.files[0].contents, b"export {};\n".to_vec());
    }
}
