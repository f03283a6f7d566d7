// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use clustalparse::errors::ClustalError;

fn main() -> Result<(), ClustalError> {
    clustalparse::run()
}
