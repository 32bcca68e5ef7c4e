//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation (TypeScript, JavaScript).
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Append one indent level to `buffer`.
    pub fn write_to(&self, buffer: &mut String) {
        match self {
            Self::Spaces(width) => buffer.extend(std::iter::repeat_n(' ', usize::from(*width))),
            Self::Tab => buffer.push('\t'),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_level(indent: Indent) -> String {
        let mut s = String::new();
        indent.write_to(&mut s);
        s
    }

    #[test]
    fn test_indent_width() {
        assert_eq!(one_level(Indent::Spaces(2)), "  ");
        assert_eq!(one_level(Indent::Spaces(3)), "   ");
        assert_eq!(one_level(Indent::Tab), "\t");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::TYPESCRIPT);
    }
}
