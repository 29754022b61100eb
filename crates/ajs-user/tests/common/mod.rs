#![allow(dead_code)]

mod browser;
mod fixtures;

pub use browser::TestBrowser;
pub use fixtures::{legacy_cookie, traits};
