//! UI Components
//!
//! Leptos components for the sidebar tree, editor and trainer.

mod action_buttons;
mod action_editor;
mod context_menu;
mod delete_confirm_button;
mod drop_zone;
mod log_panel;
mod new_folder_form;
mod notice_bar;
mod poker_matrix;
mod range_editor;
mod range_trainer;
mod range_tree;
mod tab_bar;
mod tree_row;

pub use action_buttons::ActionButtons;
pub use action_editor::ActionEditor;
pub use context_menu::ContextMenu;
pub use delete_confirm_button::DeleteConfirmButton;
pub use drop_zone::DropZone;
pub use log_panel::LogPanel;
pub use new_folder_form::NewFolderForm;
pub use notice_bar::NoticeBar;
pub use poker_matrix::PokerMatrix;
pub use range_editor::RangeEditorView;
pub use range_trainer::RangeTrainerView;
pub use range_tree::RangeTree;
pub use tab_bar::TabBar;
pub use tree_row::TreeRowView;
