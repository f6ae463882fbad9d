/// Declare the `main` function of a solution binary.
///
/// The solution is a function taking an [IStr][crate::input::IStr] and
/// returning a pair of answers. The input file is resolved relative to the
/// `inputs` directory of the calling crate, unless a path is passed on the
/// command line.
///
/// An optional `expect` asserts the produced answers, both in the default
/// run mode and for every iteration of a bench.
///
/// ```no_run
/// use lib::prelude::*;
///
/// lib::entry!(input = "d01.txt", expect = (6, 2), solve);
///
/// fn solve(mut input: IStr) -> Result<(u32, u32)> {
///     let mut lines = 0;
///     let mut width = 0;
///
///     while let Some(line) = input.try_line::<&[u8]>()? {
///         lines += 1;
///         width = width.max(line.len() as u32);
///     }
///
///     Ok((width, lines))
/// }
/// ```
#[macro_export]
macro_rules! entry {
    (input = $path:literal, expect = $expect:expr, $solve:path $(,)?) => {
        $crate::entry!(@main $path, $solve, |value| $crate::cli::check(value, &$expect));
    };

    (input = $path:literal, $solve:path $(,)?) => {
        $crate::entry!(@main $path, $solve, |_| Ok(()));
    };

    (@main $path:literal, $solve:path, $check:expr) => {
        fn main() -> $crate::prelude::Result<()> {
            let opts = $crate::cli::Opts::parse()?;
            let path = opts.input_path(concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path));
            let input = $crate::env::input(&path)?;
            $crate::cli::run(&opts, &path, input, $solve, $check)
        }
    };
}
