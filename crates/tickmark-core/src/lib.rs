//! Core types and host runtime for Tickmark components.
//!
//! This crate provides what a component needs from its host:
//! - Element trees: [`Element`], [`Node`], [`AttrValue`]
//! - The committed tree and live handles: [`Dom`], [`NodeRef`]
//! - Component lifecycle and dispatch: [`Component`], [`Mount`], [`LifecycleHooks`]
//! - Events and callbacks: [`Event`], [`ChangeEvent`], [`Callback`]
//! - Controlled/uncontrolled ownership: [`Controlled`], [`resolve`]
//!
//! Everything here is single-threaded. A mount and every callback it runs
//! live on one thread, so shared state uses `Rc` and `RefCell`.

mod callback;
mod component;
mod controlled;
mod dom;
mod element;
mod error;
mod event;
mod lifecycle;
mod mount;

pub use callback::Callback;
pub use component::{Component, Context};
pub use controlled::{resolve, Controlled, Resolved, Source};
pub use dom::{Dom, NodeRef};
pub use element::{AttrValue, Element, Listener, Node};
pub use error::HostError;
pub use event::{ChangeEvent, Event, Key};
pub use lifecycle::{HookId, LifecycleCallback, LifecycleEvent, LifecycleHooks, LifecyclePhase};
pub use mount::{Dispatch, Mount};
