//! The block store seam.

use async_trait::async_trait;
use docpress_content::Block;

use crate::Result;
use crate::types::{BlockRecord, NewBlock};

/// Remote block-tree operations used by the publisher.
///
/// Every call completes (or fails) before the next one is issued.
#[async_trait]
pub trait BlockStore: Send + Sync {
    /// Fetch one block with its child identifiers.
    async fn get_block(&self, id: &str) -> Result<BlockRecord>;

    /// Delete one block.
    async fn delete_block(&self, id: &str) -> Result<()>;

    /// Create a block and return the stored record.
    async fn create_block(&self, block: &NewBlock) -> Result<BlockRecord>;

    /// Attach a batch of content blocks to `parent_id` in one call.
    async fn put_blocks(&self, parent_id: &str, blocks: &[Block]) -> Result<()>;
}
