// Each macro writes through the process-wide writer, or through an explicit
// `LogWriter` when the first argument is `writer: <expr>`.

#[macro_export]
macro_rules! console {
    (writer: $writer:expr, $($arg:tt)+) => {
        $writer.console(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::console(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    (writer: $writer:expr, $($arg:tt)+) => {
        $writer.info(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::info(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! trace {
    (writer: $writer:expr, $($arg:tt)+) => {
        $writer.trace(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::trace(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warning {
    (writer: $writer:expr, $($arg:tt)+) => {
        $writer.warning(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::warning(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    (writer: $writer:expr, $($arg:tt)+) => {
        $writer.debug(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::debug(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    (writer: $writer:expr, $($arg:tt)+) => {
        $writer.error(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::error(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fatal {
    (writer: $writer:expr, $($arg:tt)+) => {
        $writer.fatal(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::fatal(format_args!($($arg)+))
    };
}
