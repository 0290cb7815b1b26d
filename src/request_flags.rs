use enumflags2::{bitflags, BitFlags};

/// Per-request behavior switches understood by the request pipeline.
#[bitflags]
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RequestFlag {
    /// Don't fall back to the client token when no user token is attached.
    SkipClientToken,
    /// Keep the attached token even if the server reports it invalid.
    DoNotInvalidateTokenOnError,
    /// Opt the request out of the automatic error recovery flow.
    DisableErrorRecovery,
}

pub type RequestFlags = BitFlags<RequestFlag>;
