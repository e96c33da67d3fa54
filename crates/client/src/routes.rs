//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
}
