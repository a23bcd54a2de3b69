#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Resource Reducer
//!
//! > **Client-side lifecycle state for a collection of server-backed entities.**
//!
//! Describe a resource once (a name, an id attribute, the CRUD operations it
//! supports) and get back a catalog of action types plus a pure reducer that
//! tracks every request against that resource: which ids have an update in
//! flight, whether the list read failed, and the entities the server returned.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Pure transitions, shared structure
//!
//! [`Reducer::reduce`](reducer::Reducer::reduce) takes the previous
//! [`ResourceState`](model::ResourceState) by reference and returns a new one.
//! Nothing is mutated in place. Parts of the state an action does not touch
//! are the same `Arc` allocations in the output, so "did anything change?" is
//! a pointer comparison.
//!
//! ### One vocabulary for every request
//!
//! Eight operation kinds (create, read, update, delete, each singular and
//! bulk) times five phases (attempt, succeed, fail, abort, reset). Status
//! values come from [`RequestStatus`](status::RequestStatus).
//!
//! ### Closed dispatch
//!
//! Action-type strings are resolved against an [`ActionTypes`](action_types::ActionTypes)
//! catalog built at setup. Unknown types, and actions addressed to other
//! resources, pass through untouched, so many reducers can share one action
//! stream.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. Data ([`model`], [`status`])
//! - **Key items**: [`Entity`](model::Entity), [`ResourceId`](model::ResourceId),
//!   [`ResourceMeta`](model::ResourceMeta), [`ListMeta`](model::ListMeta).
//!
//! ### 2. The Engines ([`merge`])
//! - **Role**: Pure helpers for metadata replace/merge and collection upserts.
//!   Custom reducers use them too.
//!
//! ### 3. The State Machine ([`reducer`], [`action_types`], [`action`])
//! - **Key items**: [`Reducer`](reducer::Reducer), [`ActionReducer`](reducer::ActionReducer),
//!   [`Operation`](action_types::Operation), [`Phase`](action_types::Phase).
//!
//! ### 4. Setup ([`resource`])
//! - **Key items**: [`create_resource`](resource::create_resource),
//!   [`ResourceOptions`](resource::ResourceOptions).
//!
//! ### 5. Runtime ([`store`], [`runtime`])
//! - **Role**: A single-writer task around the reducer, a request tracker that
//!   dispatches lifecycle actions around a future, and tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use resource_reducer::action_types::{Operation, Phase};
//! use resource_reducer::model::{Entity, ResourceId};
//! use resource_reducer::resource::{create_resource, ResourceOptions};
//! use resource_reducer::status::RequestStatus;
//!
//! let books = create_resource("book", ResourceOptions::default()).unwrap();
//!
//! let attempt = books.action(Operation::ReadMany, Phase::Attempt).unwrap();
//! let state = books.reduce(None, &attempt);
//! assert_eq!(state.list_meta.read_status, RequestStatus::Pending);
//!
//! let done = books
//!     .action(Operation::ReadMany, Phase::Succeed)
//!     .unwrap()
//!     .with_resources(vec![Entity::new().with("id", 24).with("title", "Dune")]);
//! let state = books.reduce(Some(&state), &done);
//! assert!(state.find("id", &ResourceId::from(24)).is_some());
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! ```

pub mod action;
pub mod action_types;
pub mod merge;
pub mod model;
pub mod reducer;
pub mod resource;
pub mod runtime;
pub mod status;
pub mod store;
