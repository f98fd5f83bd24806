//! Dispatch of store subcommands onto an opened [`SnippetStore`].

use tracing::instrument;

use crate::cli::{DeleteArgs, GetArgs, PutArgs, SearchArgs, StoreCommand};
use crate::error::Result;
use crate::output::Output;
use crate::store::SnippetStore;

/// Runs one store subcommand and renders its result.
pub fn execute(command: &StoreCommand, store: &mut SnippetStore, out: &dyn Output) -> Result<()> {
    match command {
        StoreCommand::Put(args) => cmd_put(store, out, args),
        StoreCommand::Get(args) => cmd_get(store, out, args),
        StoreCommand::Delete(args) => cmd_delete(store, out, args),
        StoreCommand::Catalog => cmd_catalog(store, out),
        StoreCommand::Search(args) => cmd_search(store, out, args),
    }
}

#[instrument(skip_all, fields(name = %args.name))]
fn cmd_put(store: &mut SnippetStore, out: &dyn Output, args: &PutArgs) -> Result<()> {
    let snippet = match args.hidden() {
        Some(hidden) => store.put(&args.name, &args.snippet, hidden)?,
        None => store.put_keep_visibility(&args.name, &args.snippet)?,
    };
    out.snippet_stored(&snippet);
    Ok(())
}

fn cmd_get(store: &SnippetStore, out: &dyn Output, args: &GetArgs) -> Result<()> {
    let message = store.get(&args.name)?;
    out.snippet_retrieved(&args.name, message.as_deref());
    Ok(())
}

fn cmd_delete(store: &mut SnippetStore, out: &dyn Output, args: &DeleteArgs) -> Result<()> {
    let existed = store.delete(&args.name)?;
    out.snippet_deleted(&args.name, existed);
    Ok(())
}

fn cmd_catalog(store: &SnippetStore, out: &dyn Output) -> Result<()> {
    let entries = store.catalog()?;
    out.catalog(&entries);
    Ok(())
}

fn cmd_search(store: &SnippetStore, out: &dyn Output, args: &SearchArgs) -> Result<()> {
    let results = store.search(&args.mkey)?;
    out.search_results(&args.mkey, &results);
    Ok(())
}
