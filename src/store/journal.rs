//! Append-only JSON-lines journal backing the product store.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{CatalogError, Result};
use crate::models::Product;

#[derive(Debug)]
pub struct Journal {
    path: PathBuf,
    file: File,
}

impl Journal {
    /// Opens (creating if needed) the journal at `path` and returns every
    /// product recorded in it, in insertion order.
    ///
    /// An unterminated final line that does not parse is a write cut short by
    /// a crash: it is logged and truncated away. Any other bad line fails the
    /// open.
    pub fn open(path: &Path) -> Result<(Self, Vec<Product>)> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(path)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;

        let mut products = Vec::new();
        let mut offset = 0;
        let mut line_no = 0;
        let mut truncated = false;
        while offset < bytes.len() {
            line_no += 1;
            let newline = bytes[offset..]
                .iter()
                .position(|&b| b == b'\n')
                .map(|i| offset + i);
            let line = &bytes[offset..newline.unwrap_or(bytes.len())];
            let next = newline.map_or(bytes.len(), |i| i + 1);

            if line.iter().all(u8::is_ascii_whitespace) {
                offset = next;
                continue;
            }

            match serde_json::from_slice::<Product>(line) {
                Ok(product) => products.push(product),
                Err(e) if newline.is_none() => {
                    warn!(
                        "dropping torn record at end of journal {} (line {}): {}",
                        path.display(),
                        line_no,
                        e
                    );
                    file.set_len(offset as u64)?;
                    truncated = true;
                }
                Err(e) => {
                    return Err(CatalogError::Internal(format!(
                        "corrupt journal {} at line {}: {}",
                        path.display(),
                        line_no,
                        e
                    )));
                }
            }
            offset = next;
        }

        // next append must start on its own line
        if !truncated && !bytes.is_empty() && !bytes.ends_with(b"\n") {
            file.write_all(b"\n")?;
        }

        Ok((
            Self {
                path: path.to_path_buf(),
                file,
            },
            products,
        ))
    }

    /// Appends one product and syncs it to disk.
    pub fn append(&mut self, product: &Product) -> Result<()> {
        let mut line = serde_json::to_string(product)
            .map_err(|e| CatalogError::Internal(e.to_string()))?;
        line.push('\n');
        self.file.write_all(line.as_bytes())?;
        self.file.sync_data()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
