//! Mesa library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

use crate::core::model::ViewMode;

/// Start view selectable from the command line.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum StartView {
    #[default]
    Gallery,
    List,
    Map,
}

impl From<StartView> for ViewMode {
    fn from(view: StartView) -> Self {
        match view {
            StartView::Gallery => ViewMode::Gallery,
            StartView::List => ViewMode::List,
            StartView::Map => ViewMode::Map,
        }
    }
}
