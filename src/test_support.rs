//! Shared fixtures for unit tests: a scripted transport and an Atom page builder.

use crate::api::Transport;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::ops::Range;
use url::Url;

pub enum FakeResponse {
    Body(String),
    Status(u16),
}

/// Replays scripted responses in order; once they run out every request gets an empty feed.
#[derive(Default)]
pub struct FakeTransport {
    responses: RefCell<VecDeque<FakeResponse>>,
    requests: RefCell<Vec<Url>>,
}

impl FakeTransport {
    pub fn new(responses: Vec<FakeResponse>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// `pages` full pages of `page_size` entries each, numbered consecutively.
    pub fn with_full_pages(pages: usize, page_size: usize) -> Self {
        Self::new(
            (0..pages)
                .map(|p| FakeResponse::Body(atom_page(p * page_size..(p + 1) * page_size)))
                .collect(),
        )
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.borrow().clone()
    }

    /// `start` parameter of every request, in order.
    pub fn starts(&self) -> Vec<usize> {
        self.requests
            .borrow()
            .iter()
            .filter_map(|u| {
                u.query_pairs()
                    .find(|(k, _)| k == "start")
                    .and_then(|(_, v)| v.parse().ok())
            })
            .collect()
    }
}

impl Transport for FakeTransport {
    async fn get(&self, url: &Url) -> Result<String> {
        self.requests.borrow_mut().push(url.clone());
        match self.responses.borrow_mut().pop_front() {
            Some(FakeResponse::Body(body)) => Ok(body),
            Some(FakeResponse::Status(status)) => Err(Error::HttpStatus {
                status,
                url: url.to_string(),
            }),
            None => Ok(atom_page(0..0)),
        }
    }
}

/// An arXiv-shaped Atom page holding one entry per number in `ids`.
///
/// Odd-numbered entries carry a DOI, a comment and a journal reference the
/// way arXiv lays them out, which splits the `<link>` elements in two runs.
pub fn atom_page(ids: Range<usize>) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:arxiv="http://arxiv.org/schemas/atom">
  <title type="html">ArXiv Query</title>
  <id>http://arxiv.org/api/test</id>
"#,
    );
    for i in ids {
        let extras = if i % 2 == 1 {
            format!(
                r#"
    <arxiv:doi>10.1000/test.{i}</arxiv:doi>
    <link title="doi" href="http://dx.doi.org/10.1000/test.{i}" rel="related"/>
    <arxiv:comment>{i} pages</arxiv:comment>
    <arxiv:journal_ref>Journal of Tests {i} (2025)</arxiv:journal_ref>"#
            )
        } else {
            String::new()
        };
        xml.push_str(&format!(
            r#"  <entry>
    <id>http://arxiv.org/abs/2501.{i:05}v1</id>
    <published>2025-01-01T00:00:00Z</published>
    <title>Paper {i}</title>
    <summary>Summary {i}</summary>
    <author><name>Author {i}A</name></author>
    <author><name>Author {i}B</name></author>{extras}
    <link href="http://arxiv.org/abs/2501.{i:05}v1" rel="alternate" type="text/html"/>
    <link title="pdf" href="http://arxiv.org/pdf/2501.{i:05}v1" rel="related" type="application/pdf"/>
  </entry>
"#
        ));
    }
    xml.push_str("</feed>\n");
    xml
}

/// A one-entry response in the exact shape the arXiv API returns for a
/// published paper: DOI link ahead of the comment and journal reference,
/// abstract and PDF links after them, affiliations inside authors.
pub const ARXIV_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <link href="http://arxiv.org/api/query?search_query%3Dall%3A%22Retrieval%20Augmented%20Generation%22%26id_list%3D%26start%3D0%26max_results%3D1" rel="self" type="application/atom+xml"/>
  <title type="html">ArXiv Query: search_query=all:"Retrieval Augmented Generation"&amp;id_list=&amp;start=0&amp;max_results=1</title>
  <id>http://arxiv.org/api/5bYlaDw0dnsH0VdfaN2KnvQ3xD0</id>
  <updated>2025-05-14T00:00:00-04:00</updated>
  <opensearch:totalResults xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">1</opensearch:totalResults>
  <opensearch:startIndex xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">0</opensearch:startIndex>
  <opensearch:itemsPerPage xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">1</opensearch:itemsPerPage>
  <entry>
    <id>http://arxiv.org/abs/2502.13957v2</id>
    <updated>2025-04-02T09:12:44Z</updated>
    <published>2025-02-19T18:31:05Z</published>
    <title>RAG-Gym: Systematic Optimization of Language Agents for Retrieval-Augmented
  Generation</title>
    <summary>  Retrieval-augmented generation (RAG) has shown great promise for
knowledge-intensive tasks. We study how process supervision improves agents.
</summary>
    <author>
      <name>Guangzhi Xiong</name>
      <arxiv:affiliation xmlns:arxiv="http://arxiv.org/schemas/atom">University of Virginia</arxiv:affiliation>
    </author>
    <author>
      <name>Qiao Jin</name>
    </author>
    <author>
      <name>Zoë Müller</name>
    </author>
    <arxiv:doi xmlns:arxiv="http://arxiv.org/schemas/atom">10.1145/3701716.3715200</arxiv:doi>
    <link title="doi" href="http://dx.doi.org/10.1145/3701716.3715200" rel="related"/>
    <arxiv:comment xmlns:arxiv="http://arxiv.org/schemas/atom">Accepted at WWW 2025; 12 pages, 4 figures</arxiv:comment>
    <arxiv:journal_ref xmlns:arxiv="http://arxiv.org/schemas/atom">Companion Proceedings of the ACM Web Conference 2025</arxiv:journal_ref>
    <link href="http://arxiv.org/abs/2502.13957v2" rel="alternate" type="text/html"/>
    <link title="pdf" href="http://arxiv.org/pdf/2502.13957v2" rel="related" type="application/pdf"/>
    <arxiv:primary_category xmlns:arxiv="http://arxiv.org/schemas/atom" term="cs.CL" scheme="http://arxiv.org/schemas/atom"/>
    <category term="cs.CL" scheme="http://arxiv.org/schemas/atom"/>
    <category term="cs.AI" scheme="http://arxiv.org/schemas/atom"/>
  </entry>
</feed>
"#;
