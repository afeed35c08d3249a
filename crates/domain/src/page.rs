use serde::{Deserialize, Serialize};

/// Offset/count pair applied to each version-scoped statement on its own,
/// so a merged dual-stack result can hold up to twice `count` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    pub offset: u32,
    pub count: u32,
}

impl PageSpec {
    pub fn new(offset: u32, count: u32) -> Self {
        Self { offset, count }
    }

    pub fn first(count: u32) -> Self {
        Self { offset: 0, count }
    }
}
