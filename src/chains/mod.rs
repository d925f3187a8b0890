//! Supported chains and their static descriptors.
//!
//! The chain set is fixed at build time. Lookup by [`ChainId`] is total;
//! lookup by numeric id or network name is fallible and never falls back
//! to a guessed default.

use std::fmt;

/// Closed enumeration of supported chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainId {
    /// Local development node (anvil/hardhat-style).
    Local,
    /// Ethereum Mainnet.
    Mainnet,
    /// Sepolia testnet.
    Sepolia,
    /// BNB Smart Chain.
    Bsc,
    /// Arbitrum One.
    Arbitrum,
    /// Optimism Mainnet.
    Optimism,
}

/// Static per-network record of RPC endpoint and numeric chain identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainDescriptor {
    /// Numeric chain identifier (EIP-155).
    pub id: u64,
    /// Network name used on the CLI and in logs.
    pub name: &'static str,
    /// Default public RPC endpoint.
    pub rpc_url: &'static str,
}

const LOCAL: ChainDescriptor = ChainDescriptor {
    id: 31337,
    name: "local",
    rpc_url: "http://127.0.0.1:8545",
};

const MAINNET: ChainDescriptor = ChainDescriptor {
    id: 1,
    name: "mainnet",
    rpc_url: "https://eth.llamarpc.com",
};

const SEPOLIA: ChainDescriptor = ChainDescriptor {
    id: 11155111,
    name: "sepolia",
    rpc_url: "https://rpc.sepolia.org",
};

const BSC: ChainDescriptor = ChainDescriptor {
    id: 56,
    name: "bsc",
    rpc_url: "https://bsc-dataseed1.bnbchain.org",
};

const ARBITRUM: ChainDescriptor = ChainDescriptor {
    id: 42161,
    name: "arbitrum",
    rpc_url: "https://arb1.arbitrum.io/rpc",
};

const OPTIMISM: ChainDescriptor = ChainDescriptor {
    id: 10,
    name: "optimism",
    rpc_url: "https://mainnet.optimism.io",
};

impl ChainId {
    /// Every supported chain, in CLI listing order.
    pub const ALL: [ChainId; 6] = [
        ChainId::Local,
        ChainId::Mainnet,
        ChainId::Sepolia,
        ChainId::Bsc,
        ChainId::Arbitrum,
        ChainId::Optimism,
    ];

    /// Get the static descriptor for this chain.
    pub fn descriptor(self) -> &'static ChainDescriptor {
        match self {
            ChainId::Local => &LOCAL,
            ChainId::Mainnet => &MAINNET,
            ChainId::Sepolia => &SEPOLIA,
            ChainId::Bsc => &BSC,
            ChainId::Arbitrum => &ARBITRUM,
            ChainId::Optimism => &OPTIMISM,
        }
    }

    /// Network name as used on the CLI.
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Numeric chain identifier (EIP-155).
    pub fn id(self) -> u64 {
        self.descriptor().id
    }

    /// Look up a chain by network name (case-insensitive).
    pub fn from_name(name: &str) -> Option<ChainId> {
        let name = name.to_ascii_lowercase();
        ChainId::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Look up a chain by numeric identifier.
    pub fn from_id(id: u64) -> Option<ChainId> {
        ChainId::ALL.iter().copied().find(|c| c.id() == id)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
