/// External change notifications the reorder core reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    LayoutChanged, // The stored grid layout changed.
    ItemDragEnd,   // An item finished being dragged.
    FavoritesChanged,
    SettingsChanged, // One of the extension's own settings keys changed.
    InstalledAppsChanged,
    FoldersChanged, // The folder membership list changed.
    GridShown,      // The app grid was opened.
    Shutdown,
}
