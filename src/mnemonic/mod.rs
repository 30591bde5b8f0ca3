/**
 * Mnemonic Module
 *
 * BIP-39 mnemonic sentences for seeding test wallets.
 */
mod generator;

pub use generator::*;
