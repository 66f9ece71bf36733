//! Fixtures shared by unit tests.

use std::sync::Arc;

use tempfile::TempDir;

use crate::app::AppContext;
use crate::config::{Config, Session};
use crate::fetcher::mock::MockFetcher;

pub const PAGE_URL: &str = "https://adventofcode.com/2015/day/6";
pub const INPUT_URL: &str = "https://adventofcode.com/2015/day/6/input";
pub const ANSWER_URL: &str = "https://adventofcode.com/2015/day/6/answer";

pub const SOLVED_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en-us">
<head><title>Day 6 - Advent of Code 2015</title></head>
<body>
<header><h1 class="title-global"><a href="/">Advent of Code</a></h1></header>
<main>
<article class="day-desc"><h2>--- Day 6: Probably a Fire Hazard ---</h2><p>Because your neighbors keep defeating you, you've decided to deploy one million lights in a 1000x1000 grid.</p>
<p>For example:</p>
<ul>
<li><code>turn on 0,0 through 999,999</code> would turn on (or leave on) every light.</li>
</ul>
<p>After following the instructions, <em>how many lights are lit</em>?</p>
</article>
<p>Your puzzle answer was <code>377891</code>.</p>
<article class="day-desc"><h2 id="part2">--- Part Two ---</h2><p>The light grid has brightness controls.</p>
<p>For example, <code>toggle 0,0 through 999,999</code> would increase the total brightness by <code>2000000</code>.</p>
</article>
<p>Your puzzle answer was <code>14110788</code>.</p>
<p>Both parts of this puzzle are complete! They provide two gold stars: **</p>
</main>
</body>
</html>
"#;

/// Part one solved with `42`; the example mentions `7`.
pub const PART_ONE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en-us">
<body>
<main>
<article class="day-desc"><h2>--- Day 6: Probably a Fire Hazard ---</h2><p>For example, after the instructions there are <code>7</code> lights on.</p>
</article>
<p>Your puzzle answer was <code>42</code>.</p>
<article class="day-desc"><h2 id="part2">--- Part Two ---</h2><p>What is the total brightness?</p>
</article>
<form method="post" action="6/answer"><input type="hidden" name="level" value="2"/><p>Answer: <input type="text" name="answer" autocomplete="off"/> <input type="submit" value="[Submit]"/></p></form>
</main>
</body>
</html>
"#;

/// Nothing solved yet; the example mentions `7`.
pub const UNSOLVED_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en-us">
<body>
<main>
<article class="day-desc"><h2>--- Day 6: Probably a Fire Hazard ---</h2><p>For example, after the instructions there are <code>7</code> lights on.</p>
<p>How many lights are lit?</p>
</article>
<form method="post" action="6/answer"><input type="hidden" name="level" value="1"/><p>Answer: <input type="text" name="answer" autocomplete="off"/> <input type="submit" value="[Submit]"/></p></form>
</main>
</body>
</html>
"#;

pub const CORRECT_RESPONSE: &str = r#"<!DOCTYPE html>
<html lang="en-us">
<body>
<main>
<article><p>That's the right answer!  You are <span class="day-success">one gold star</span> closer to powering the weather machine. <a href="/2015/day/6#part2">[Continue to Part Two]</a></p></article>
</main>
</body>
</html>
"#;

pub const WRONG_RESPONSE: &str = r#"<!DOCTYPE html>
<html lang="en-us">
<body>
<main>
<article><p>That's not the right answer; your answer is too low.  If you're stuck, make sure you're using the full input data. Please wait one minute before trying again. <a href="/2015/day/6">[Return to Day 6]</a></p></article>
</main>
</body>
</html>
"#;

pub const TOO_RECENT_RESPONSE: &str = r#"<!DOCTYPE html>
<html lang="en-us">
<body>
<main>
<article><p>You gave an answer too recently; you have to wait after submitting an answer before trying again.  You have 42s left to wait. <a href="/2015/day/6">[Return to Day 6]</a></p></article>
</main>
</body>
</html>
"#;

/// A context over a temporary cache directory backed by `fetcher`.
pub fn context(fetcher: Arc<MockFetcher>) -> (TempDir, AppContext) {
    context_with(fetcher, |config| config)
}

pub fn context_with(
    fetcher: Arc<MockFetcher>,
    configure: impl FnOnce(Config) -> Config,
) -> (TempDir, AppContext) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        cache: dir.path().join(".adventus"),
        ..Config::default()
    }
    .with_session(Session::new("test-session"));
    let ctx = AppContext::with_fetcher(configure(config), fetcher);
    (dir, ctx)
}
