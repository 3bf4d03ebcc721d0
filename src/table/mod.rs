//! Shared listing engine
//!
//! Every list endpoint in the admin API goes through this module so
//! pagination and search behave identically across resources. A
//! listing runs in one of two modes:
//!
//! - **server mode**: the upstream API paginates; the engine is a pure
//!   view over externally-owned pagination state and forwards page,
//!   limit and search changes verbatim.
//! - **client mode**: the whole collection is in memory; the engine
//!   filters, counts and slices it locally.
//!
//! Server mode is selected iff external pagination metadata is present
//! AND a page-change delegate is wired; any other combination falls
//! back to client mode. The boolean is computed once per view build
//! and everything downstream branches on it.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

use crate::models::PageInfo;

pub const DEFAULT_LIMIT: u32 = 20;
pub const LIMIT_OPTIONS: [u32; 3] = [20, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMode {
    Client,
    Server,
}

/// Mode selection rule: server mode iff both inputs are truthy.
pub fn select_mode(pagination: Option<&PageInfo>, has_page_delegate: bool) -> TableMode {
    if pagination.is_some() && has_page_delegate {
        TableMode::Server
    } else {
        TableMode::Client
    }
}

/// One entry of the pagination control strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageItem {
    Page(u32),
    /// Non-interactive gap marker, serialized as `"..."`
    Ellipsis(&'static str),
}

pub const ELLIPSIS: PageItem = PageItem::Ellipsis("...");

/// Compute the visible page-number window for a pagination control.
///
/// Up to six pages are shown in full; beyond that the window keeps the
/// first page, the last page and a neighborhood of the current page,
/// with ellipsis markers for the gaps.
pub fn page_window(page: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= 6 {
        return (1..=total_pages).map(PageItem::Page).collect();
    }
    if page <= 3 {
        return vec![
            PageItem::Page(1),
            PageItem::Page(2),
            PageItem::Page(3),
            PageItem::Page(4),
            ELLIPSIS,
            PageItem::Page(total_pages),
        ];
    }
    if page >= total_pages - 2 {
        return vec![
            PageItem::Page(1),
            ELLIPSIS,
            PageItem::Page(total_pages - 3),
            PageItem::Page(total_pages - 2),
            PageItem::Page(total_pages - 1),
            PageItem::Page(total_pages),
        ];
    }
    vec![
        PageItem::Page(1),
        ELLIPSIS,
        PageItem::Page(page - 1),
        PageItem::Page(page),
        PageItem::Page(page + 1),
        ELLIPSIS,
        PageItem::Page(total_pages),
    ]
}

/// Key identifying a row for expansion state: the row's id field when
/// it has one, otherwise its position in the visible slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Id(String),
    Index(usize),
}

pub fn row_key(row: &Value, index: usize) -> RowKey {
    let id = row
        .get("_id")
        .or_else(|| row.get("id"))
        .and_then(Value::as_str);
    match id {
        Some(id) => RowKey::Id(id.to_string()),
        None => RowKey::Index(index),
    }
}

/// Local listing state: current page, limit, search term and the set
/// of expanded row keys.
///
/// The expansion set is independent of pagination; switching pages
/// does not prune previously expanded keys. `collapse_all` exists for
/// callers that want the stricter behavior.
#[derive(Debug, Clone)]
pub struct TableState {
    page: u32,
    limit: u32,
    search: String,
    expanded: HashSet<RowKey>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}

impl TableState {
    pub fn new() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            search: String::new(),
            expanded: HashSet::new(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Change the page size and reset to the first page so the slice
    /// stays in range. The limit menu is enforced at the web boundary
    /// against the configured options; the engine only rejects zero.
    pub fn set_limit(&mut self, limit: u32) {
        if limit > 0 {
            self.limit = limit;
            self.page = 1;
        }
    }

    /// Change the search term. Any change resets the page to 1 so a
    /// narrowed result set can never leave the user on an out-of-range
    /// page.
    pub fn set_search<S: Into<String>>(&mut self, term: S) {
        self.search = term.into();
        self.page = 1;
    }

    /// Reactive reset hook: called when the upstream collection is
    /// replaced (refetch, mutation splice).
    pub fn data_changed(&mut self) {
        self.page = 1;
    }

    pub fn toggle_expanded(&mut self, key: RowKey) {
        if !self.expanded.remove(&key) {
            self.expanded.insert(key);
        }
    }

    pub fn is_expanded(&self, key: &RowKey) -> bool {
        self.expanded.contains(key)
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}

/// The computed view over one listing render
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    pub mode: TableMode,
    pub rows: Vec<&'a Value>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub window: Vec<PageItem>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub show_empty: bool,
}

/// Build the view for one render.
///
/// `pagination` and `has_page_delegate` together select the mode. In
/// server mode `data` is taken as the current page verbatim and the
/// metadata comes from `pagination` (page/limit/total defaulting to
/// 1/20/0). In client mode the engine searches, counts and slices
/// `data` against the local state.
pub fn build_view<'a>(
    data: &'a [Value],
    loading: bool,
    pagination: Option<&PageInfo>,
    has_page_delegate: bool,
    state: &TableState,
) -> TableView<'a> {
    let mode = select_mode(pagination, has_page_delegate);

    let (rows, page, limit, total, total_pages) = match mode {
        TableMode::Server => {
            // The engine does not compute pages here; it is a pure
            // view over externally-owned pagination state.
            let info = pagination.copied().unwrap_or_default();
            let total_pages = if info.total_pages > 0 {
                info.total_pages
            } else {
                pages_for(info.total, info.limit)
            };
            let rows: Vec<&Value> = data.iter().collect();
            (rows, info.page.max(1), info.limit, info.total, total_pages)
        }
        TableMode::Client => {
            let filtered: Vec<&Value> = if state.search.is_empty() {
                data.iter().collect()
            } else {
                data.iter()
                    .filter(|row| row_matches(row, &state.search))
                    .collect()
            };
            let total = filtered.len() as u64;
            let total_pages = pages_for(total, state.limit);
            // Offset arithmetic stays in u64: page and limit are both
            // caller-controlled u32s and their product can exceed u32.
            let start = (state.page as u64 - 1) * state.limit as u64;
            let rows = if start < filtered.len() as u64 {
                let start = start as usize;
                let end = (start + state.limit as usize).min(filtered.len());
                filtered[start..end].to_vec()
            } else {
                Vec::new()
            };
            (rows, state.page, state.limit, total, total_pages)
        }
    };

    TableView {
        mode,
        show_empty: !loading && rows.is_empty(),
        prev_disabled: page == 1 || loading,
        next_disabled: page == total_pages || loading,
        window: page_window(page, total_pages),
        rows,
        page,
        limit,
        total,
        total_pages,
    }
}

fn pages_for(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    (total.div_ceil(limit as u64) as u32).max(1)
}

/// A row matches when the stringified value of any of its fields
/// contains the term as a case-insensitive substring.
pub fn row_matches(row: &Value, term: &str) -> bool {
    let needle = term.to_lowercase();
    match row {
        Value::Object(fields) => fields
            .values()
            .any(|value| value_text(value).to_lowercase().contains(&needle)),
        other => value_text(other).to_lowercase().contains(&needle),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(n: usize) -> Vec<Value> {
        (0..n)
            .map(|i| json!({"_id": format!("row-{i}"), "name": format!("Item {i}")}))
            .collect()
    }

    #[test]
    fn server_mode_requires_pagination_and_delegate() {
        let info = PageInfo::default();
        assert_eq!(select_mode(Some(&info), true), TableMode::Server);
        assert_eq!(select_mode(Some(&info), false), TableMode::Client);
        assert_eq!(select_mode(None, true), TableMode::Client);
        assert_eq!(select_mode(None, false), TableMode::Client);
    }

    #[test]
    fn client_pagination_slices_positionally() {
        let data = rows(45);
        let mut state = TableState::new();
        state.set_page(3);

        let view = build_view(&data, false, None, false, &state);
        assert_eq!(view.total, 45);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.rows[0]["_id"], "row-40");
    }

    #[test]
    fn client_total_pages_floors_at_one() {
        let data = rows(0);
        let view = build_view(&data, false, None, false, &TableState::new());
        assert_eq!(view.total_pages, 1);
        assert!(view.show_empty);
    }

    #[test]
    fn out_of_range_page_yields_no_rows() {
        let data = rows(10);
        let mut state = TableState::new();
        state.set_page(5);
        let view = build_view(&data, false, None, false, &state);
        assert!(view.rows.is_empty());
    }

    #[test]
    fn maximum_page_number_yields_no_rows() {
        let data = rows(1);
        let mut state = TableState::new();
        state.set_page(u32::MAX);
        let view = build_view(&data, false, None, false, &state);
        assert!(view.rows.is_empty());
        assert_eq!(view.total, 1);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn search_resets_page_to_one() {
        let mut state = TableState::new();
        state.set_page(4);
        state.set_search("polity");
        assert_eq!(state.page(), 1);

        state.set_page(2);
        state.data_changed();
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn search_is_case_insensitive_over_any_field() {
        let row = json!({"_id": "x", "title": "Indian Polity", "price": 499});
        assert!(row_matches(&row, "POLITY"));
        assert!(row_matches(&row, "499"));
        assert!(!row_matches(&row, "geography"));
    }

    #[test]
    fn search_filters_client_rows() {
        let data = vec![
            json!({"_id": "a", "name": "History Capsule"}),
            json!({"_id": "b", "name": "Geography Notes"}),
            json!({"_id": "c", "name": "Modern History"}),
        ];
        let mut state = TableState::new();
        state.set_search("history");
        let view = build_view(&data, false, None, false, &state);
        assert_eq!(view.total, 2);
        assert_eq!(view.rows[0]["_id"], "a");
        assert_eq!(view.rows[1]["_id"], "c");
    }

    #[test]
    fn page_window_shows_all_when_six_or_fewer() {
        assert_eq!(
            page_window(2, 4),
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Page(4)
            ]
        );
    }

    #[test]
    fn page_window_leading() {
        assert_eq!(
            page_window(1, 10),
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Page(4),
                ELLIPSIS,
                PageItem::Page(10)
            ]
        );
    }

    #[test]
    fn page_window_trailing() {
        assert_eq!(
            page_window(10, 10),
            vec![
                PageItem::Page(1),
                ELLIPSIS,
                PageItem::Page(7),
                PageItem::Page(8),
                PageItem::Page(9),
                PageItem::Page(10)
            ]
        );
    }

    #[test]
    fn page_window_middle() {
        assert_eq!(
            page_window(5, 10),
            vec![
                PageItem::Page(1),
                ELLIPSIS,
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Page(6),
                ELLIPSIS,
                PageItem::Page(10)
            ]
        );
    }

    #[test]
    fn empty_state_suppressed_while_loading() {
        let data: Vec<Value> = Vec::new();
        let loading = build_view(&data, true, None, false, &TableState::new());
        assert!(!loading.show_empty);
        let settled = build_view(&data, false, None, false, &TableState::new());
        assert!(settled.show_empty);
    }

    #[test]
    fn expand_toggle_is_idempotent_in_pairs() {
        let mut state = TableState::new();
        let key = RowKey::Id("row-1".to_string());
        assert!(!state.is_expanded(&key));
        state.toggle_expanded(key.clone());
        assert!(state.is_expanded(&key));
        state.toggle_expanded(key.clone());
        assert!(!state.is_expanded(&key));
    }

    #[test]
    fn expansion_survives_page_changes() {
        let mut state = TableState::new();
        let key = RowKey::Id("row-1".to_string());
        state.toggle_expanded(key.clone());
        state.set_page(3);
        assert!(state.is_expanded(&key));
    }

    #[test]
    fn row_key_falls_back_to_index() {
        assert_eq!(
            row_key(&json!({"_id": "abc"}), 7),
            RowKey::Id("abc".to_string())
        );
        assert_eq!(row_key(&json!({"name": "no id"}), 7), RowKey::Index(7));
    }

    #[test]
    fn boundary_disables() {
        let data = rows(45);
        let mut state = TableState::new();

        let first = build_view(&data, false, None, false, &state);
        assert!(first.prev_disabled);
        assert!(!first.next_disabled);

        state.set_page(3);
        let last = build_view(&data, false, None, false, &state);
        assert!(!last.prev_disabled);
        assert!(last.next_disabled);

        let busy = build_view(&data, true, None, false, &state);
        assert!(busy.prev_disabled);
        assert!(busy.next_disabled);
    }

    #[test]
    fn server_mode_passes_rows_through() {
        let data = rows(3);
        let info = PageInfo {
            page: 4,
            limit: 20,
            total: 75,
            total_pages: 4,
        };
        let view = build_view(&data, false, Some(&info), true, &TableState::new());
        assert_eq!(view.mode, TableMode::Server);
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.page, 4);
        assert_eq!(view.total, 75);
        assert!(view.next_disabled);
    }

    #[test]
    fn server_mode_defaults_when_metadata_sparse() {
        let data = rows(2);
        let info = PageInfo {
            page: 1,
            limit: 20,
            total: 0,
            total_pages: 0,
        };
        let view = build_view(&data, false, Some(&info), true, &TableState::new());
        assert_eq!(view.limit, 20);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn set_limit_resets_page_and_ignores_zero() {
        let mut state = TableState::new();
        state.set_limit(0);
        assert_eq!(state.limit(), DEFAULT_LIMIT);
        state.set_page(3);
        state.set_limit(50);
        assert_eq!(state.limit(), 50);
        assert_eq!(state.page(), 1);
    }
}
