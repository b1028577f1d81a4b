//! Fixed tab table. Persisted `activeTab` indices refer to positions in
//! [`TAB_MAP`], so reordering it changes what stored indices mean.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvokeTab {
    Txt2img,
    Img2img,
    Inpainting,
    Outpainting,
    Nodes,
    Postprocess,
    Training,
}

pub const TAB_MAP: &[InvokeTab] = &[
    InvokeTab::Txt2img,
    InvokeTab::Img2img,
    InvokeTab::Inpainting,
    InvokeTab::Outpainting,
    InvokeTab::Nodes,
    InvokeTab::Postprocess,
    InvokeTab::Training,
];

impl InvokeTab {
    pub fn as_str(self) -> &'static str {
        match self {
            InvokeTab::Txt2img => "txt2img",
            InvokeTab::Img2img => "img2img",
            InvokeTab::Inpainting => "inpainting",
            InvokeTab::Outpainting => "outpainting",
            InvokeTab::Nodes => "nodes",
            InvokeTab::Postprocess => "postprocess",
            InvokeTab::Training => "training",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        TAB_MAP.iter().copied().find(|t| t.as_str() == name)
    }

    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| TAB_MAP.get(i))
            .copied()
    }

    pub fn index(self) -> i32 {
        TAB_MAP
            .iter()
            .position(|t| *t == self)
            .map_or(-1, |i| i as i32)
    }
}

/// Position of `name` in [`TAB_MAP`], or -1 when no tab has that name.
pub fn tab_index(name: &str) -> i32 {
    InvokeTab::from_name(name).map_or(-1, InvokeTab::index)
}
