pub mod fragment;
pub mod identity;
pub mod liquid_glass;
pub mod registry;
pub mod displacement;
pub mod export;

pub use fragment::{Fragment, FnFragment};
pub use identity::IdentityFragment;
pub use liquid_glass::LiquidGlassFragment;
pub use registry::{build_registry, create_fragment, find_fragment, FragmentEntry};
pub use displacement::{decode_channel, encode_channel, generate, DisplacementMap, NEUTRAL_CHANNEL};
pub use export::{encode_png, to_data_url};
