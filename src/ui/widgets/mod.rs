// SPDX-License-Identifier: MPL-2.0
pub mod orbit_spinner;

pub use orbit_spinner::OrbitSpinner;
