//! Cross-crate integration tests for the passerelle workspace

#[cfg(test)]
mod conversion_integration;
#[cfg(test)]
mod region_integration;
