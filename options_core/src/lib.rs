pub mod action;
pub mod error;
pub mod main_loop;
mod merge;
pub mod reducer;
pub mod state;
pub mod store;
pub mod tabs;

pub use invoke_protocol as protocol;

pub use crate::action::{OptionsAction, Parameter, TabSelector};
pub use crate::error::OptionsError;
pub use crate::main_loop::{InboundMsg, MainLoop, OutboundMsg, INBOUND_CAP, OUTBOUND_CAP};
pub use crate::reducer::reduce;
pub use crate::state::{FacetoolType, InitialImage, OptionsState, UpscalingLevel, FACETOOL_TYPES};
pub use crate::store::OptionsStore;
pub use crate::tabs::{tab_index, InvokeTab, TAB_MAP};
