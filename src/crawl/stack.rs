// src/crawl/stack.rs
// =============================================================================
// This module implements the crawl itself, depth-first.
//
// How it works:
// 1. Download the starting page (depth 0) and extract its valid links
// 2. Push those links onto a stack, last link first, so the first link
//    on the page is on top
// 3. Pop a link, print it, and if depth + 1 is still below the maximum,
//    download it and push ITS links on top of the stack
// 4. Repeat until the stack is empty
//
// Because children go on top of the stack, a page's links are fully
// explored before its next sibling is printed. That's exactly the order
// a recursive "print link, then recurse into it" function would produce,
// without growing the call stack.
//
// What we deliberately don't do:
// - No visited set: a page linking back to its parent is fetched again
//   (the depth limit is what stops it)
// - No concurrency and no delays: one request at a time, in order
// - No URL resolution: hrefs are fetched exactly as written
// =============================================================================

use super::printer::LinkPrinter;
use crate::config::CrawlConfig;
use crate::extract::extract_links;
use crate::fetch::Fetcher;
use crate::link::Link;
use std::io::{self, Write};
use tracing::{debug, error};

/// Crawls from `seed_url`, printing every valid link in depth-first order.
///
/// Fetch failures only end their own branch. The only error returned is a
/// failure to write to the output.
pub fn crawl<F, W>(
    fetcher: &F,
    seed_url: &str,
    config: &CrawlConfig,
    printer: &mut LinkPrinter<W>,
) -> io::Result<()>
where
    F: Fetcher,
    W: Write,
{
    // Links waiting to be printed (and maybe followed); the top is next
    let mut stack: Vec<Link> = Vec::new();
    push_links(&mut stack, discover(fetcher, seed_url, 0, config.max_depth));

    while let Some(link) = stack.pop() {
        printer.print(&link)?;

        let next_depth = link.depth() + 1;
        if next_depth < config.max_depth {
            let children = discover(fetcher, link.url(), next_depth, config.max_depth);
            push_links(&mut stack, children);
        }
    }

    printer.flush()
}

// Pushes a page's links so that the first one in document order is popped first
fn push_links(stack: &mut Vec<Link>, links: Vec<Link>) {
    stack.extend(links.into_iter().rev());
}

// Downloads one page and returns its valid links.
//
// The body is read to the end and dropped before this returns, so at most
// one response is open at any time.
fn discover<F: Fetcher>(fetcher: &F, url: &str, depth: usize, max_depth: usize) -> Vec<Link> {
    if depth >= max_depth {
        debug!("Not fetching {} at depth {} (max depth {})", url, depth, max_depth);
        return Vec::new();
    }

    let body = match fetcher.fetch(url) {
        Ok(body) => body,
        Err(e) => {
            error!("{}", e);
            return Vec::new();
        }
    };

    let links: Vec<Link> = extract_links(body, depth)
        .into_iter()
        .filter(|link| link.is_valid(max_depth))
        .collect();
    debug!("{} valid link(s) on {}", links.len(), url);
    links
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a Vec as a stack instead of recursion?
//    - push() adds to the end, pop() takes from the end (last in, first out)
//    - Recursion would work too, but every level keeps a stack frame alive;
//      an explicit Vec keeps the pending links on the heap instead
//
// 2. Why push the links in reverse?
//    - pop() returns the most recently pushed item
//    - Reversing means the FIRST link on the page ends up on top
//
// 3. Stack vs queue:
//    - A queue (VecDeque + pop_front) gives breadth-first order
//    - A stack (Vec + pop) gives depth-first order, which is what we print
//
// 4. What are the generic parameters F and W?
//    - F is any Fetcher (the real HTTP one, or a fake one in tests)
//    - W is any writer (stdout in main, a Vec<u8> in tests)
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::fetch::FetchError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io::Cursor;

    // Serves pages from memory and remembers every URL it was asked for.
    // Unknown URLs answer with a 404.
    #[derive(Default)]
    struct FakeWeb {
        pages: HashMap<String, String>,
        requests: RefCell<Vec<String>>,
    }

    impl FakeWeb {
        fn page(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), html.to_string());
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl Fetcher for FakeWeb {
        type Body = Cursor<Vec<u8>>;

        fn fetch(&self, url: &str) -> Result<Self::Body, FetchError> {
            self.requests.borrow_mut().push(url.to_string());
            match self.pages.get(url) {
                Some(html) => Ok(Cursor::new(html.clone().into_bytes())),
                None => Err(FetchError::Status {
                    code: 404,
                    url: url.to_string(),
                }),
            }
        }
    }

    fn run(web: &FakeWeb, max_depth: usize, format: OutputFormat) -> String {
        let config = CrawlConfig {
            max_depth,
            format,
            ..CrawlConfig::default()
        };
        let mut printer = LinkPrinter::new(Vec::new(), config.format);
        crawl(web, "root", &config, &mut printer).unwrap();
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn test_depth_first_order() {
        let web = FakeWeb::default()
            .page("root", r#"<a href="a">A</a> <a href="b">B</a>"#)
            .page("a", r#"<a href="a1">A1</a><a href="a2">A2</a>"#)
            .page("a1", r#"<a href="deep">Deep</a>"#)
            .page("b", r#"<a href="b1">B1</a>"#);

        let output = run(&web, 3, OutputFormat::Text);
        assert_eq!(
            output,
            "A (0) - a\n\
             \tA1 (1) - a1\n\
             \t\tDeep (2) - deep\n\
             \tA2 (1) - a2\n\
             B (0) - b\n\
             \tB1 (1) - b1\n"
        );
    }

    #[test]
    fn test_never_fetches_at_max_depth() {
        let web = FakeWeb::default()
            .page("root", r#"<a href="a">A</a>"#)
            .page("a", r#"<a href="b">B</a>"#)
            .page("b", r#"<a href="c">C</a>"#)
            .page("c", r#"<a href="d">D</a>"#);

        let output = run(&web, 3, OutputFormat::Text);
        // c is printed at depth 2 but never fetched (it would be depth 3)
        assert_eq!(web.requests(), vec!["root", "a", "b"]);
        assert_eq!(output, "A (0) - a\n\tB (1) - b\n\t\tC (2) - c\n");
    }

    #[test]
    fn test_varying_max_depth() {
        let web = FakeWeb::default()
            .page("root", r#"<a href="a">A</a>"#)
            .page("a", r#"<a href="b">B</a>"#);

        assert_eq!(run(&web, 1, OutputFormat::Text), "A (0) - a\n");
        assert_eq!(web.requests(), vec!["root"]);

        let web = FakeWeb::default().page("root", r#"<a href="a">A</a>"#);
        assert_eq!(run(&web, 0, OutputFormat::Text), "");
        assert!(web.requests().is_empty());
    }

    #[test]
    fn test_failed_sibling_does_not_stop_the_next_one() {
        // "missing" 404s, "b" must still be fetched and expanded
        let web = FakeWeb::default()
            .page("root", r#"<a href="x">X</a>"#)
            .page("x", r#"<a href="missing">Gone</a><a href="b">B</a>"#)
            .page("b", r#"<a href="b1">B1</a>"#);

        let output = run(&web, 3, OutputFormat::Text);
        assert_eq!(web.requests(), vec!["root", "x", "missing", "b"]);
        assert_eq!(
            output,
            "X (0) - x\n\tGone (1) - missing\n\tB (1) - b\n\t\tB1 (2) - b1\n"
        );
    }

    #[test]
    fn test_seed_failure_prints_nothing() {
        let web = FakeWeb::default();
        assert_eq!(run(&web, 3, OutputFormat::Text), "");
        assert_eq!(web.requests(), vec!["root"]);
    }

    #[test]
    fn test_invalid_links_are_skipped() {
        let web = FakeWeb::default().page(
            "root",
            r#"<a href="javascript:void(0)">Menu</a>
               <a href="/empty"> </a>
               <a name="anchor">No href</a>
               <a>No attributes</a>
               <a href="/ok">OK</a>"#,
        );

        let output = run(&web, 1, OutputFormat::Text);
        assert_eq!(output, "OK (0) - /ok\n");
    }

    #[test]
    fn test_cycles_are_bounded_by_depth() {
        let web = FakeWeb::default().page("root", r#"<a href="root">Again</a>"#);

        let output = run(&web, 3, OutputFormat::Text);
        assert_eq!(web.requests(), vec!["root", "root", "root"]);
        assert_eq!(
            output,
            "Again (0) - root\n\tAgain (1) - root\n\t\tAgain (2) - root\n"
        );
    }

    #[test]
    fn test_json_output() {
        let web = FakeWeb::default()
            .page("root", r#"<a href="a">A</a>"#)
            .page("a", r#"<a href="b">B</a>"#);

        let output = run(&web, 2, OutputFormat::Json);
        assert_eq!(
            output,
            "{\"url\":\"a\",\"text\":\"A\",\"depth\":0}\n\
             {\"url\":\"b\",\"text\":\"B\",\"depth\":1}\n"
        );
    }
}
