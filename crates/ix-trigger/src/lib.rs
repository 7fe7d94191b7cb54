//! `ix-trigger` — trigger capability trait and the standard variants.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`trigger`]    | `Trigger` trait — one boolean sample per tick             |
//! | [`inputs`]     | `SceneInputs` — host-fed sensor facts                     |
//! | [`descriptor`] | `TriggerDesc` — pre-parsed authoring data                 |
//! | [`collision`]  | any watched node pair in contact                          |
//! | [`proximity`]  | all watched nodes within a distance band of a reference   |
//! | [`user_input`] | a normalized input path currently active                  |
//! | [`visibility`] | all watched nodes visible to the viewer                   |
//! | [`factory`]    | `TriggerFactory` — kind-keyed construction + validation   |
//! | [`error`]      | `TriggerError`, `TriggerResult<T>`                        |
//!
//! # Design notes
//!
//! The engine core only ever consumes each trigger's boolean sample.  The
//! geometric work behind that boolean (collision shapes, occlusion queries,
//! camera frustums) stays in the host: every frame the host pushes the raw
//! facts — contact pairs, node positions, the viewer pose, active input
//! paths, visible nodes, resolved anchors — into a shared [`SceneInputs`],
//! and the variants here reduce those facts to `true`/`false`.

pub mod collision;
pub mod descriptor;
pub mod error;
pub mod factory;
pub mod inputs;
pub mod proximity;
pub mod trigger;
pub mod user_input;
pub mod visibility;


pub use collision::CollisionTrigger;
pub use descriptor::TriggerDesc;
pub use error::{TriggerError, TriggerResult};
pub use factory::TriggerFactory;
pub use inputs::SceneInputs;
pub use proximity::ProximityTrigger;
pub use trigger::Trigger;
pub use user_input::UserInputTrigger;
pub use visibility::VisibilityTrigger;
