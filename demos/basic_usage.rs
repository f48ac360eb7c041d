//! Basic usage of restree.
//!
//! Builds a small resource tree from the capability traits, resolves paths
//! through it, normalizes metadata and warms a stream with the prefetcher.
//!
//! Run with: `cargo run --example basic_usage`

use async_trait::async_trait;
use restree::*;
use serde::Serialize;
use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncReadExt;

// =============================================================================
// Step 1: Implement a readable entry
// =============================================================================

/// Inspection output of one volume, served as a readable file.
#[derive(Debug, Clone, Serialize)]
struct VolumeInfo {
    name: String,
    driver: String,
    mountpoint: String,
}

struct InspectFile {
    base: EntryBase,
    info: VolumeInfo,
}

impl Entry for InspectFile {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn as_readable(&self) -> Option<&dyn Readable> {
        Some(self)
    }
}

#[async_trait]
impl Readable for InspectFile {
    async fn open(&self, _ctx: &Context) -> Result<Box<dyn Stream>, BackendError> {
        Ok(Box::new(Cursor::new(serde_json::to_vec_pretty(&self.info)?)))
    }
}

// =============================================================================
// Step 2: Assemble the tree
// =============================================================================

fn volume(name: &str) -> Arc<dyn Entry> {
    let info = VolumeInfo {
        name: name.to_string(),
        driver: "local".to_string(),
        mountpoint: format!("/var/lib/docker/volumes/{name}/_data"),
    };
    let inspect: Arc<dyn Entry> = Arc::new(InspectFile {
        base: EntryBase::new("inspect.json"),
        info,
    });
    Arc::new(StaticGroup::new(name, vec![inspect]))
}

fn docker() -> Arc<dyn Entry> {
    let volumes: Arc<dyn Entry> =
        Arc::new(StaticGroup::new("volumes", vec![volume("pgdata"), volume("cache")]));
    Arc::new(StaticGroup::new("docker", vec![volumes]))
}

// =============================================================================
// Step 3: Use it
// =============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    println!("=== restree Basic Usage Example ===\n");

    let ctx = Context::background();
    let root = docker();

    // --- Listing ---
    println!("1. Listing /volumes...");
    let volumes = resolve_path(&ctx, root.clone(), "/volumes").await?;
    if let Some(group) = volumes.as_group() {
        for child in group.children(&ctx).await? {
            println!("   - {} {:?}", child.name(), child.capabilities());
        }
    }

    // --- Resolving and reading ---
    println!("\n2. Reading /volumes/pgdata/inspect.json...");
    let inspect = resolve_path(&ctx, root.clone(), "/volumes/pgdata/inspect.json").await?;
    if let Some(readable) = inspect.as_readable() {
        let mut stream = readable.open(&ctx).await?;
        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).await?;

        let attributes = normalize_bytes(&raw)?;
        println!("   driver = {}", attributes["driver"]);
        println!("   mountpoint = {}", attributes["mountpoint"]);
    }

    // --- Resolution errors ---
    println!("\n3. Resolution errors...");
    for path in ["/volumes/missing", "/volumes/pgdata/inspect.json/deeper"] {
        let err = resolve_path(&ctx, root.clone(), path)
            .await
            .err()
            .ok_or("expected a resolution error")?;
        println!("   {path}: {:?} ({err})", err.kind());
    }

    // --- Prefetching ---
    println!("\n4. Prefetching /volumes/cache/inspect.json...");
    let prefetcher = Prefetcher::new(PrefetchConfig::default().with_timeout(Duration::from_secs(2)));
    let entry = resolve_path(&ctx, root, "/volumes/cache/inspect.json").await?;
    let handle = prefetcher.prefetch_with_handle(entry);
    // In-memory streams are not releasable, so nothing is kept warm.
    println!("   claimed warm stream: {}", handle.claim().await.is_some());

    println!("\n=== Done ===");
    Ok(())
}
