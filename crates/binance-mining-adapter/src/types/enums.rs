/*
[INPUT]:  Integer status/type codes from mining endpoints
[OUTPUT]: Typed Rust enums that reject unknown codes
[POS]:    Data layer - code tables for API enums
[UPDATE]: When Binance adds or retires a code
*/

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Integer code outside an enum's documented table
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown {kind} code {code}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: i64,
}

/// Defines an integer-coded enum with strict decoding
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident = $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "i64")]
        pub enum $name {
            $($variant = $code),+
        }

        impl $name {
            /// Wire code for this variant
            pub fn code(self) -> i64 {
                self as i64
            }
        }

        impl TryFrom<i64> for $name {
            type Error = UnknownCode;

            fn try_from(code: i64) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(UnknownCode {
                        kind: stringify!($name),
                        code,
                    }),
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.code()
            }
        }
    };
}

coded_enum! {
    /// Worker health as reported by the mining pool
    WorkerStatus {
        Valid = 1,
        Invalid = 2,
        NoLongerValid = 3,
    }
}

coded_enum! {
    /// Destination of a mining payout
    ProfitType {
        MiningWallet = 0,
        MiningAddress = 5,
        PoolSavings = 7,
        Transferred = 8,
        IncomeTransfer = 31,
        HashrateResaleMiningWallet = 32,
        HashrateResalePoolSavings = 33,
    }
}

coded_enum! {
    /// Settlement state of a mining payout
    ProfitStatus {
        Unpaid = 0,
        Paying = 1,
        Paid = 2,
    }
}
