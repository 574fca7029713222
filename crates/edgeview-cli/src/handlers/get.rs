use crate::Result;
use crate::config::GetConfig;
use edgeview_engine::filter;
use edgeview_index::RecordStore;
use edgeview_types::KindSelector;
use std::io::Write;
use std::path::Path;

/// `get <TYPE>`: validate, read, filter, render.
///
/// `open_store` is only called once the type argument is known to be valid,
/// so usage errors never touch the store.
pub fn handle<S, F>(
    types: &[String],
    config: &GetConfig,
    open_store: F,
    out: &mut dyn Write,
) -> Result<()>
where
    S: RecordStore,
    F: FnOnce(&Path) -> edgeview_index::Result<S>,
{
    let selector = KindSelector::from_args(types)?;

    let store = open_store(&config.input)?;
    let records = store.fetch_all(selector)?;
    let records = filter(records, &config.scope);
    tracing::debug!(selector = %selector, count = records.len(), format = %config.format, "rendering");

    config.format.renderer().render(records, out)
}
