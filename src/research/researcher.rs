use crate::analyze;
use crate::extract::{self, ContentExtractor, ExtractedPage, PageExtractor};
use crate::llm::LLMClient;
use crate::research::synthesis;
use crate::search::{SearchProvider, SourceFinder, WebSearchProvider};
use crate::types::{
    ActionRecord, AgentStatus, AppError, BudgetOverrides, Depth, Finding, ResearchReport,
    ResearchState, Result, Source,
};
use chrono::Utc;
use parking_lot::RwLock;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};
use uuid::Uuid;

/// Autonomous research agent.
///
/// Given a topic and a [`Depth`], the agent plans search queries, discovers
/// sources up to the depth's budget, extracts their content concurrently,
/// scores finding confidence, and synthesizes a [`ResearchReport`].
///
/// Collaborators are injected through [`ResearcherBuilder`]; the defaults
/// use the daedra-backed web search and page fetch with no LLM (heuristic
/// synthesis).
pub struct AgenticResearcher {
    finder: SourceFinder<Arc<dyn SearchProvider>>,
    extractor: Arc<dyn ContentExtractor>,
    llm: Option<Arc<dyn LLMClient>>,
    state: RwLock<ResearchState>,
    history: RwLock<Vec<ActionRecord>>,
    counters: RwLock<Counters>,
}

#[derive(Default, Clone, Copy)]
struct Counters {
    findings: usize,
    sources: usize,
}

impl Default for AgenticResearcher {
    fn default() -> Self {
        ResearcherBuilder::new().build()
    }
}

impl AgenticResearcher {
    /// Create a researcher with the default collaborators (daedra search
    /// and page fetch, heuristic synthesis).
    pub fn new() -> Self {
        Self::default()
    }

    /// Start configuring a researcher.
    pub fn builder() -> ResearcherBuilder {
        ResearcherBuilder::new()
    }

    /// Research a topic and assemble a report.
    ///
    /// The report's `topic` echoes the input and its `sources` never exceed
    /// `depth.source_budget()`. Per-source extraction failures and
    /// per-query search failures are logged and skipped; the call only
    /// errors when the topic is empty, every search query fails, or the
    /// configured LLM fails during synthesis.
    pub async fn research(&self, topic: &str, depth: Depth) -> Result<ResearchReport> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(AppError::InvalidInput("Topic must not be empty".to_string()));
        }

        match self.run_pipeline(topic, depth).await {
            Ok(report) => Ok(report),
            Err(e) => {
                self.set_state(ResearchState::Error);
                self.log_action("research_failed", json!({ "error": e.to_string() }));
                Err(e)
            }
        }
    }

    async fn run_pipeline(&self, topic: &str, depth: Depth) -> Result<ResearchReport> {
        self.set_state(ResearchState::Searching);
        self.log_action(
            "research_started",
            json!({ "topic": topic, "depth": depth.to_string() }),
        );

        // Step 1: discover sources within the depth budget
        let mut sources = self.finder.find_sources(topic, depth).await?;
        self.counters.write().sources = sources.len();
        info!(topic = %topic, count = sources.len(), "sources discovered");

        // Step 2: extract content concurrently
        self.set_state(ResearchState::Extracting);
        let mut findings = self.extract_all(topic, &mut sources).await;
        self.counters.write().findings = findings.len();

        // Step 3: score and order findings
        self.set_state(ResearchState::Analyzing);
        self.log_action("analyzing", json!({ "findings": findings.len() }));
        analyze::score_findings(topic, &mut findings);

        // Step 4: synthesize summary and insights
        self.set_state(ResearchState::Synthesizing);
        let summary = match &self.llm {
            Some(llm) if !findings.is_empty() => {
                self.log_action("synthesizing", json!({ "model": llm.model_name() }));
                synthesis::llm_summary(llm.as_ref(), topic, &findings).await?
            }
            _ => synthesis::heuristic_summary(topic, findings.len(), sources.len()),
        };
        let key_insights = analyze::select_insights(&findings);

        self.set_state(ResearchState::Complete);
        self.log_action("research_complete", json!({ "findings": findings.len() }));

        Ok(ResearchReport {
            topic: topic.to_string(),
            summary,
            findings,
            sources,
            key_insights,
            created_at: Utc::now(),
        })
    }

    /// Fan extraction out over all sources with a `JoinSet`, updating each
    /// source's content in place and returning one finding per page that
    /// could be extracted. Source order is preserved.
    async fn extract_all(&self, topic: &str, sources: &mut [Source]) -> Vec<Finding> {
        let mut set: JoinSet<(usize, Result<ExtractedPage>)> = JoinSet::new();

        for (idx, source) in sources.iter().enumerate() {
            let extractor = Arc::clone(&self.extractor);
            let url = source.url.clone();

            self.log_action("extracting", json!({ "url": url }));

            set.spawn(async move {
                let page = extractor.extract(&url).await;
                (idx, page)
            });
        }

        let mut pages: HashMap<usize, ExtractedPage> = HashMap::new();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((idx, Ok(page))) => {
                    pages.insert(idx, page);
                }
                Ok((idx, Err(e))) => {
                    warn!(url = %sources[idx].url, error = %e, "extraction failed, skipping source");
                }
                Err(e) => {
                    warn!(error = %e, "extraction task panicked");
                }
            }
        }

        let mut findings = Vec::with_capacity(pages.len());
        for (idx, source) in sources.iter_mut().enumerate() {
            let Some(page) = pages.remove(&idx) else {
                continue;
            };

            source.content = page.content.clone();
            source.extracted_at = Some(Utc::now());
            if source.title.is_empty() && !page.title.is_empty() {
                source.title = page.title;
            }

            findings.push(Finding {
                topic: topic.to_string(),
                content: extract::snippet(&page.content),
                source: source.url.clone(),
                confidence: 1.0,
                key_points: extract::key_points(&page.content),
            });
        }

        findings
    }

    /// Snapshot of the agent's progress.
    pub fn status(&self) -> AgentStatus {
        let counters = *self.counters.read();
        AgentStatus {
            state: *self.state.read(),
            findings_count: counters.findings,
            sources_count: counters.sources,
            actions_taken: self.history.read().len(),
        }
    }

    /// The actions logged so far, oldest first.
    pub fn action_history(&self) -> Vec<ActionRecord> {
        self.history.read().clone()
    }

    fn set_state(&self, state: ResearchState) {
        *self.state.write() = state;
    }

    fn log_action(&self, action: &str, params: serde_json::Value) {
        self.history.write().push(ActionRecord {
            id: Uuid::new_v4(),
            action: action.to_string(),
            params,
            timestamp: Utc::now(),
            state: *self.state.read(),
        });
    }
}

/// Builder for [`AgenticResearcher`].
///
/// # Example
///
/// ```ignore
/// let researcher = AgenticResearcher::builder()
///     .llm(Arc::new(my_client))
///     .build();
/// ```
pub struct ResearcherBuilder {
    search: Option<Arc<dyn SearchProvider>>,
    extractor: Option<Arc<dyn ContentExtractor>>,
    llm: Option<Arc<dyn LLMClient>>,
    budgets: BudgetOverrides,
}

impl Default for ResearcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResearcherBuilder {
    /// Start with the default collaborators.
    pub fn new() -> Self {
        Self {
            search: None,
            extractor: None,
            llm: None,
            budgets: BudgetOverrides::default(),
        }
    }

    /// Replace the search provider.
    pub fn search_provider(mut self, provider: Arc<dyn SearchProvider>) -> Self {
        self.search = Some(provider);
        self
    }

    /// Replace the content extractor.
    pub fn extractor(mut self, extractor: Arc<dyn ContentExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Attach an LLM for summary synthesis.
    pub fn llm(mut self, llm: Arc<dyn LLMClient>) -> Self {
        self.llm = Some(llm);
        self
    }

    /// Shrink per-depth source budgets. Caps above the built-in budgets
    /// are clamped down, so a run never exceeds shallow 3 / medium 5 /
    /// deep 10.
    pub fn source_budgets(mut self, budgets: BudgetOverrides) -> Self {
        self.budgets = budgets;
        self
    }

    /// Build the researcher.
    pub fn build(self) -> AgenticResearcher {
        let search = self
            .search
            .unwrap_or_else(|| Arc::new(WebSearchProvider::new()));
        let extractor = self
            .extractor
            .unwrap_or_else(|| Arc::new(PageExtractor::new()));

        AgenticResearcher {
            finder: SourceFinder::with_budgets(search, self.budgets),
            extractor,
            llm: self.llm,
            state: RwLock::new(ResearchState::Idle),
            history: RwLock::new(Vec::new()),
            counters: RwLock::new(Counters::default()),
        }
    }
}

/// Research agent that runs the same pipeline over several topics.
pub struct MultiTopicResearcher {
    researcher: AgenticResearcher,
}

impl Default for MultiTopicResearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiTopicResearcher {
    /// Create with a default researcher.
    pub fn new() -> Self {
        Self {
            researcher: AgenticResearcher::new(),
        }
    }

    /// Wrap an already-configured researcher.
    pub fn with_researcher(researcher: AgenticResearcher) -> Self {
        Self { researcher }
    }

    /// Research each topic in turn at the same depth, keyed by topic.
    ///
    /// Topics are processed sequentially; a failing topic fails the whole
    /// batch so callers never see a partial map silently.
    pub async fn research_topics(
        &self,
        topics: &[String],
        depth: Depth,
    ) -> Result<HashMap<String, ResearchReport>> {
        let mut results = HashMap::with_capacity(topics.len());

        for topic in topics {
            let report = self.researcher.research(topic, depth).await?;
            results.insert(topic.clone(), report);
        }

        Ok(results)
    }
}
