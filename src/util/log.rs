// 標準エラー出力へのログ
// debug!は環境変数MAHJONG_DEBUGが設定されている場合のみ出力

#[inline]
pub fn is_debug_enabled() -> bool {
    std::env::var_os("MAHJONG_DEBUG").is_some()
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!(
            "[ERROR]({}:{}) {}",
            file!(),
            line!(),
            format_args!($($arg)*)
        )
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!(
            "[WARN]({}:{}) {}",
            file!(),
            line!(),
            format_args!($($arg)*)
        )
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        eprintln!(
            "[INFO]({}:{}) {}",
            file!(),
            line!(),
            format_args!($($arg)*)
        )
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::util::log::is_debug_enabled() {
            eprintln!(
                "[DEBUG]({}:{}) {}",
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

#[macro_export]
macro_rules! error_exit {
    ($($arg:tt)*) => {{
        eprintln!(
            "[ERROR]({}:{}) {}",
            file!(),
            line!(),
            format_args!($($arg)*)
        );
        std::process::exit(1);
    }};
}
