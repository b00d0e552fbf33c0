use super::Serializer;

use crate::Dialect;

impl Serializer {
    pub fn mysql() -> Serializer {
        Serializer::new(Dialect::Mysql)
    }

    pub fn ansi() -> Serializer {
        Serializer::new(Dialect::Ansi)
    }
}
