// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{ClientError, ValidationError};
use crate::gateway::Gateway;
use crate::models::ScanResult;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Receipt {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Holds the selected receipt image in memory until it has been scanned.
#[derive(Debug, Default)]
pub struct ReceiptScanner {
    selected: Option<Receipt>,
}

impl ReceiptScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, file_name: &str, bytes: Vec<u8>) {
        self.selected = Some(Receipt {
            file_name: file_name.to_string(),
            bytes,
        });
    }

    pub fn select_file(&mut self, path: &Path) -> Result<()> {
        let bytes =
            fs::read(path).with_context(|| format!("Read receipt {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "receipt.jpg".to_string());
        self.select(&name, bytes);
        Ok(())
    }

    pub fn selected(&self) -> Option<&Receipt> {
        self.selected.as_ref()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Upload the selected image. The image is dropped once the scan
    /// succeeds; on failure it stays selected for another attempt.
    pub fn scan(&mut self, gateway: &dyn Gateway) -> Result<ScanResult, ClientError> {
        let receipt = self
            .selected
            .as_ref()
            .filter(|r| !r.bytes.is_empty())
            .ok_or(ValidationError::NoReceipt)?;
        let result = gateway.scan_receipt(&receipt.bytes, &receipt.file_name)?;
        info!(merchant = %result.merchant_name, total = result.total_amount, "receipt scanned");
        self.clear();
        Ok(result)
    }
}
