// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod doctor;
pub mod exporter;
pub mod history;
pub mod invoices;
pub mod report;
pub mod settings;
pub mod wallets;
