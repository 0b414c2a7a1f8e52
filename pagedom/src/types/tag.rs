use std::fmt;

/// Element kind. Only the tags page behaviours look for get a variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    Body,
    #[default]
    Div,
    Span,
    Table,
    THead,
    TBody,
    Tr,
    Th,
    Td,
    Form,
    Input,
    Button,
    Img,
    Template,
    Other(String),
}

impl Tag {
    pub fn name(&self) -> &str {
        match self {
            Self::Body => "body",
            Self::Div => "div",
            Self::Span => "span",
            Self::Table => "table",
            Self::THead => "thead",
            Self::TBody => "tbody",
            Self::Tr => "tr",
            Self::Th => "th",
            Self::Td => "td",
            Self::Form => "form",
            Self::Input => "input",
            Self::Button => "button",
            Self::Img => "img",
            Self::Template => "template",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "body" => Self::Body,
            "div" => Self::Div,
            "span" => Self::Span,
            "table" => Self::Table,
            "thead" => Self::THead,
            "tbody" => Self::TBody,
            "tr" => Self::Tr,
            "th" => Self::Th,
            "td" => Self::Td,
            "form" => Self::Form,
            "input" => Self::Input,
            "button" => Self::Button,
            "img" => Self::Img,
            "template" => Self::Template,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
