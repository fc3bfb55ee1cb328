//! Session mode and type enumerations for the create workflow.
//!
//! DESIGN
//! ======
//! Both enums are closed sets mirrored from the server's session schema. The
//! `as_str`/`parse` pairs exist so form widgets can round-trip values through
//! DOM strings without ever producing an out-of-set variant.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Operating mode of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionMode {
    /// Chat with an existing model.
    #[default]
    Inference,
    /// Teach a model from uploaded material (rag/finetune settings apply).
    Finetune,
}

impl SessionMode {
    /// Wire value used in query strings and request payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inference => "inference",
            Self::Finetune => "finetune",
        }
    }

    /// Parse a wire value; unknown strings yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "inference" => Some(Self::Inference),
            "finetune" => Some(Self::Finetune),
            _ => None,
        }
    }

    /// Human-facing label for mode widgets.
    pub fn label(self) -> &'static str {
        match self {
            Self::Inference => "Inference",
            Self::Finetune => "Learn",
        }
    }
}

/// Content modality of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionType {
    #[default]
    Text,
    Image,
}

impl SessionType {
    /// Wire value used in query strings and request payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
        }
    }

    /// Parse a wire value; unknown strings yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "text" => Some(Self::Text),
            "image" => Some(Self::Image),
            _ => None,
        }
    }
}
