use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    #[default]
    Sleep,
    Awake,
    Work,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Sleep, Category::Awake, Category::Work];

    /// Overlap resolution order: work beats awake, awake beats sleep.
    pub fn priority(self) -> u8 {
        match self {
            Category::Sleep => 1,
            Category::Awake => 2,
            Category::Work => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sleep => "sleep",
            Category::Awake => "awake",
            Category::Work => "work",
        }
    }

    /// Legend text shown next to each color swatch.
    pub fn legend_label(&self) -> &'static str {
        match self {
            Category::Sleep => "Sleeping",
            Category::Awake => "Awake",
            Category::Work => "Working",
        }
    }
}
