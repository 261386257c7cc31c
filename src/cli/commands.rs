use std::path::Path;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::{AppContext, Result};

pub async fn render(
    ctx: &mut AppContext,
    fragment: &str,
    output: Option<&Path>,
    open: bool,
) -> Result<()> {
    if ctx.start(fragment).await?.is_none() {
        eprintln!("No view for fragment {:?}", fragment);
    }

    match output {
        Some(path) => {
            ctx.write_page(path)?;
            println!("Wrote {}", path.display());
            if open {
                open_page(path);
            }
        }
        None => print!("{}", ctx.page_html()),
    }

    Ok(())
}

/// Run the navigation loop: one fragment-change event per input line.
///
/// Events are handled strictly in order. A failed render is reported and
/// the page file keeps the last successful render.
pub async fn browse<R>(ctx: &mut AppContext, input: R, output: &Path, open: bool) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    match ctx.start("").await {
        Ok(_) => ctx.write_page(output)?,
        Err(e) => {
            tracing::warn!("Initial render failed: {}", e);
            eprintln!("Error: {}", e);
        }
    }

    println!("Writing pages to {}", output.display());
    println!("Enter a fragment (#/page/<n>, #/show/<id>) or q to quit");
    if open {
        open_page(output);
    }

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line == "q" || line == "quit" {
            break;
        }

        match ctx.navigate(line).await {
            Ok(Some(id)) => {
                ctx.write_page(output)?;
                let name = ctx.router.view_name(id).unwrap_or("unknown");
                println!("{} -> {} view", ctx.location.hash(), name);
            }
            Ok(None) => println!("{} -> nothing to render", ctx.location.hash()),
            Err(e) => {
                tracing::warn!("Render of {:?} failed: {}", ctx.location.hash(), e);
                eprintln!("Error: {}", e);
            }
        }
    }

    Ok(())
}

fn open_page(path: &Path) {
    if let Err(e) = open::that(path) {
        eprintln!("Failed to open browser: {}", e);
    }
}
