//! Write the room graph as the JSON document the game server loads.

use crate::model::WorldGraph;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub fn emit(graph: &WorldGraph, path: &Path, pretty: bool) -> io::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let mut out = BufWriter::new(File::create(path)?);
    to_writer(graph, &mut out, pretty)?;
    out.flush()
}

pub fn to_writer<W: Write>(graph: &WorldGraph, mut out: W, pretty: bool) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut out, graph)?;
    } else {
        serde_json::to_writer(&mut out, graph)?;
    }
    writeln!(out)
}
