use anyhow::Result;

use crate::{
    runtime::Runtime,
    theme::{Theme, ThemeStore},
};

/// Prints the active theme, flipping and saving it first when `toggle` is set.
#[tracing::instrument(skip(runtime))]
pub fn theme<R: Runtime>(runtime: R, toggle: bool, system_default: Theme) -> Result<()> {
    let mut store = ThemeStore::init(runtime, system_default);
    let current = if toggle {
        store.toggle()?
    } else {
        store.current()
    };
    println!("{}", current);
    Ok(())
}
