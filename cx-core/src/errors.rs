pub use std::backtrace::Backtrace;

pub use anyhow::{
    anyhow,
    bail,
    ensure,
};
pub use paste::paste;
pub use regex::{
    Regex,
    RegexBuilder,
};
pub use thiserror::Error;

pub type EmptyResult = anyhow::Result<()>;

pub const BUILD_DIR: &str = "/.build/";
pub const RUSTC_DIR: &str = "/rustc/";
pub const GLIBC: &str = "glibc";

// Declares a thiserror enum along with snake_case constructors for each variant that return an
// anyhow::Error directly
#[macro_export]
macro_rules! err_impl {
    (@hidden $errtype:ident, $item:ident, String) => {
        paste! {
            pub(crate) fn [<$item:snake>](in_: &str) -> anyhow::Error {
                anyhow!{$errtype::$item(in_.into())}
            }
        }
    };

    (@hidden $errtype:ident, $item:ident, $($dtype:tt)::+) => {
        paste! {
            pub(crate) fn [<$item:snake>](in_: &$($dtype)::+) -> anyhow::Error {
                anyhow!{$errtype::$item(in_.clone())}
            }
        }
    };

    ($errtype:ident,
        $(#[$errinfo:meta] $item:ident($($dtype:tt)::+),)+
    ) => {
        #[derive(Debug, Error)]
        pub(crate) enum $errtype {
            $(#[$errinfo] $item($($dtype)::+)),+
        }

        impl $errtype {
            $(err_impl! {@hidden $errtype, $item, $($dtype)::+})+
        }
    };
}

// Logs an anyhow error along with the frames of its backtrace that point into our own code;
// tokio and std frames are collapsed into a "skipped N frames" marker.
#[macro_export]
macro_rules! cxerr {
    (@hidden $err:ident, $msg:literal, $($args:expr),*) => {
        let bt = $err.backtrace().to_string();
        let mut skipped_frames = 0;
        let mut filtered_bt = match RegexBuilder::new(r"^\s+\d+(?s:.*?)(\s+at\s+.*:\d+)$").multi_line(true).build() {
            Ok(re) => re.find_iter(&bt).fold(String::new(), |mut acc, frame| {
                let frame = frame.as_str();
                if frame.contains(BUILD_DIR) || frame.contains(RUSTC_DIR) || frame.contains(GLIBC) {
                    skipped_frames += 1;
                } else if !frame.is_empty() {
                    if skipped_frames == 1 {
                        acc += "      -- <skipped 1 frame> --\n";
                    } else if skipped_frames > 1 {
                        acc += &format!("      -- <skipped {skipped_frames} frames> --\n");
                    }
                    acc += &format!("{frame}\n");
                    skipped_frames = 0;
                }
                acc
            }),
            Err(_) => bt.clone(),
        };

        if skipped_frames == 1 {
            filtered_bt += "      -- <skipped 1 frame> --";
        } else if skipped_frames > 1 {
            filtered_bt += &format!("      -- <skipped {skipped_frames} frames> --");
        }
        error!(concat!($msg, "\n\n{}\n\nPartial Stack Trace:\n\n{}\n\n") $(, $args)*, $err, filtered_bt);
    };

    ($err:ident, $msg:literal) => {
        cxerr! {@hidden $err, $msg, };
    };

    ($err:ident, $msg:literal, $($args:expr),*) => {
        cxerr! {@hidden $err, $msg, $($args),*};
    };
}

pub use {
    cxerr,
    err_impl,
};

err_impl! {ExtractError,
    #[error("referenced object {0} not found")]
    ReferenceNotFound(String),

    #[error("referenced object {0} has not been synced with Coralogix yet")]
    ReferenceNotSynced(String),

    #[error("no object named {0} found on the Coralogix backend")]
    BackendNameNotFound(String),

    #[error("key {0} missing from configmap")]
    ConfigMapKeyMissing(String),

    #[error("invalid time of day: {0}")]
    InvalidTime(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),
}

err_impl! {ConversionError,
    #[error("cannot convert object: {0}")]
    Unsupported(String),

    #[error("invalid time zone: {0}")]
    InvalidTimeZone(String),

    #[error("malformed object: {0}")]
    Malformed(String),
}
