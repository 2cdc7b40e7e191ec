use crate::blocks::{link_blocks, render_outline};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::graph::{Graph, Placement, Target};
use crate::selector::{select, SelectOptions};
use rand::Rng;
use tracing::debug;

/// Where picked links go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    /// Return the outline to the caller.
    #[default]
    Print,
    /// Write the blocks into a page of the graph.
    Write { target: Target, placement: Placement },
}

#[derive(Debug, Clone, Default)]
pub struct PickOptions {
    pub select: SelectOptions,
    pub header: Option<String>,
    pub destination: Destination,
}

pub fn run<G, R>(graph: &mut G, options: &PickOptions, rng: &mut R) -> Result<CmdResult>
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    let pages = graph.all_pages()?;
    let mut result = CmdResult::default();

    let picked = match select(&pages, &options.select, rng) {
        Ok(picked) => picked,
        Err(empty) => {
            debug!(%empty, "nothing to pick");
            result.add_message(CmdMessage::warning(empty.to_string()));
            return Ok(result);
        }
    };

    let requested = options.select.count.get();
    if picked.len() < requested {
        result.add_message(CmdMessage::info(format!(
            "Only {} matching page{}, picked all of them",
            picked.len(),
            if picked.len() == 1 { "" } else { "s" }
        )));
    }

    let blocks = link_blocks(&picked, options.header.as_deref());
    result.outline = Some(render_outline(&blocks));
    result.listed_pages = picked.into_iter().cloned().collect();

    if let Destination::Write { target, placement } = &options.destination {
        let path = graph.write_blocks(target, &blocks, *placement)?;
        result.add_message(CmdMessage::success(format!(
            "Added {} link{} to {}",
            result.listed_pages.len(),
            if result.listed_pages.len() == 1 { "" } else { "s" },
            target
        )));
        result.written_to = Some(path);
    }

    result.blocks = blocks;
    Ok(result)
}
