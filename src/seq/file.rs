// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use crate::seq::record::SeqRecord;

// A whole alignment, one record per label, in label order.
//

pub type SeqFile = Vec<SeqRecord>;
