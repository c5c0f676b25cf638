//! Template files: GraphQL text in which each `${key}` marks an
//! interpolated value.

const PLACEHOLDER_OPEN: &str = "${";
const PLACEHOLDER_CLOSE: char = '}';

/// A template file split into its literal segments and the keys of the
/// values interpolated between them.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TemplateSource {
    pub keys: Vec<String>,
    pub segments: Vec<String>,
}

impl TemplateSource {
    pub fn parse(source: &str) -> Result<Self, TemplateSourceError> {
        let mut keys = vec![];
        let mut segments = vec![];
        let mut rest = source;
        let mut offset = 0;

        while let Some(open_idx) = rest.find(PLACEHOLDER_OPEN) {
            segments.push(rest[..open_idx].to_string());

            let key_start = open_idx + PLACEHOLDER_OPEN.len();
            let Some(close_len) = rest[key_start..].find(PLACEHOLDER_CLOSE) else {
                return Err(TemplateSourceError::UnclosedPlaceholder {
                    byte_offset: offset + open_idx,
                });
            };

            let key = rest[key_start..key_start + close_len].trim();
            if key.is_empty() {
                return Err(TemplateSourceError::EmptyPlaceholder {
                    byte_offset: offset + open_idx,
                });
            }
            if !key.chars().all(is_key_char) {
                return Err(TemplateSourceError::InvalidKey {
                    byte_offset: offset + open_idx,
                    key: key.to_string(),
                });
            }
            keys.push(key.to_string());

            let consumed = key_start + close_len + PLACEHOLDER_CLOSE.len_utf8();
            offset += consumed;
            rest = &rest[consumed..];
        }
        segments.push(rest.to_string());

        Ok(Self {
            keys,
            segments,
        })
    }
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub(crate) enum TemplateSourceError {
    #[error("Empty `${{}}` placeholder at byte {byte_offset}")]
    EmptyPlaceholder {
        byte_offset: usize,
    },

    #[error("Invalid placeholder key `{key}` at byte {byte_offset}")]
    InvalidKey {
        byte_offset: usize,
        key: String,
    },

    #[error("Placeholder opened at byte {byte_offset} is never closed")]
    UnclosedPlaceholder {
        byte_offset: usize,
    },
}
