// Dark Elixir state managers
// Managers handle stateful operations: the download watcher and the
// downloads-folder listing.

pub mod download_watcher;
pub mod file_list_manager;
