// tests/support/mocks/catalog.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use openalt_catalog::application::ports::util::SlugGenerator;
use openalt_catalog::domain::catalog::{
    CatalogKind, NameFilter, Record, RecordId, RecordListing, RecordName, RecordPage,
    RecordReadRepository, Slug, SortDirection, SortField,
};
use openalt_catalog::domain::errors::{DomainError, DomainResult};
use openalt_catalog::domain::tool::{
    NewTool, Tool, ToolPatch, ToolRepository, ToolStatus, ToolUpdate, WebUrl,
};
use openalt_catalog::infrastructure::util::DefaultSlugGenerator;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};

#[derive(Default)]
struct CatalogState {
    records: HashMap<CatalogKind, Vec<Record>>,
    tools: Vec<Tool>,
    next_id: i64,
}

impl CatalogState {
    fn next_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId::new(self.next_id).unwrap()
    }

    fn records_of(&self, kind: CatalogKind) -> Vec<Record> {
        match kind {
            CatalogKind::Tool => self.tools.iter().map(Tool::to_record).collect(),
            other => self.records.get(&other).cloned().unwrap_or_default(),
        }
    }

    fn tool_slug_taken(&self, slug: &Slug, ignore: Option<RecordId>) -> bool {
        self.tools
            .iter()
            .any(|t| t.slug == *slug && Some(t.id) != ignore)
    }
}

/// In-memory stand-in for the Postgres store. It implements both ports over
/// one shared state and enforces slug uniqueness on insert the way the
/// database constraint does.
#[derive(Default)]
pub struct InMemoryCatalog {
    state: Mutex<CatalogState>,
    /// While non-zero, `slug_exists` answers "free" regardless of the data,
    /// which makes the next insert lose the race against an existing row.
    stale_probes: AtomicU32,
}

fn compare(a: &Record, b: &Record, field: SortField) -> Ordering {
    let primary = match field {
        SortField::Name => a.name.as_str().cmp(b.name.as_str()),
        SortField::Slug => a.slug.as_str().cmp(b.slug.as_str()),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_stale_probes(&self, count: u32) {
        self.stale_probes.store(count, AtomicOrdering::SeqCst);
    }

    /// Add a record to `kind` with a slug derived from `name`.
    pub fn seed(&self, kind: CatalogKind, name: &str, created_at: DateTime<Utc>) -> RecordId {
        let slug = DefaultSlugGenerator.slugify(name);
        self.seed_with_slug(kind, name, &slug, created_at)
    }

    pub fn seed_with_slug(
        &self,
        kind: CatalogKind,
        name: &str,
        slug: &str,
        created_at: DateTime<Utc>,
    ) -> RecordId {
        if kind == CatalogKind::Tool {
            return self.seed_tool(name, slug, created_at);
        }
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.records.entry(kind).or_default().push(Record {
            id,
            kind,
            name: RecordName::new(name).unwrap(),
            slug: Slug::new(slug).unwrap(),
            created_at,
            updated_at: created_at,
        });
        id
    }

    pub fn seed_tool(&self, name: &str, slug: &str, created_at: DateTime<Utc>) -> RecordId {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.tools.push(Tool {
            id,
            name: RecordName::new(name).unwrap(),
            slug: Slug::new(slug).unwrap(),
            website: WebUrl::new(format!("https://{slug}.example.com")).unwrap(),
            repository: WebUrl::new(format!("https://github.com/example/{slug}")).unwrap(),
            description: None,
            submitter_name: None,
            submitter_email: None,
            status: ToolStatus::Published,
            published_at: Some(created_at),
            category_ids: Vec::new(),
            alternative_ids: Vec::new(),
            created_at,
            updated_at: created_at,
        });
        id
    }

    pub fn tools(&self) -> Vec<Tool> {
        self.state.lock().unwrap().tools.clone()
    }

    pub fn tool(&self, id: RecordId) -> Option<Tool> {
        self.tools().into_iter().find(|t| t.id == id)
    }

    pub fn tool_slugs(&self) -> Vec<String> {
        self.tools()
            .into_iter()
            .map(|t| t.slug.into_inner())
            .collect()
    }
}

#[async_trait]
impl RecordReadRepository for InMemoryCatalog {
    async fn list_page(
        &self,
        kind: CatalogKind,
        listing: &RecordListing,
    ) -> DomainResult<RecordPage> {
        let mut matching: Vec<Record> = self
            .state
            .lock()
            .unwrap()
            .records_of(kind)
            .into_iter()
            .filter(|record| listing.matches(record))
            .collect();

        matching.sort_by(|a, b| {
            let ordering = compare(a, b, listing.sort.field);
            match listing.sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total = matching.len() as u64;
        let offset = usize::try_from(listing.window.offset()).unwrap();
        let records = matching
            .into_iter()
            .skip(offset)
            .take(listing.window.per_page() as usize)
            .collect();

        Ok(RecordPage { records, total })
    }

    async fn find_by_slug(&self, kind: CatalogKind, slug: &Slug) -> DomainResult<Option<Record>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .records_of(kind)
            .into_iter()
            .find(|record| record.slug == *slug))
    }

    async fn slug_exists(
        &self,
        kind: CatalogKind,
        slug: &Slug,
        ignore_id: Option<RecordId>,
    ) -> DomainResult<bool> {
        let stale = self
            .stale_probes
            .fetch_update(AtomicOrdering::SeqCst, AtomicOrdering::SeqCst, |n| {
                n.checked_sub(1)
            })
            .is_ok();
        if stale {
            return Ok(false);
        }

        Ok(self
            .state
            .lock()
            .unwrap()
            .records_of(kind)
            .iter()
            .any(|record| record.slug == *slug && Some(record.id) != ignore_id))
    }

    async fn search_by_name(
        &self,
        kind: CatalogKind,
        term: &NameFilter,
        limit: u32,
    ) -> DomainResult<Vec<Record>> {
        let mut matching: Vec<Record> = self
            .state
            .lock()
            .unwrap()
            .records_of(kind)
            .into_iter()
            .filter(|record| term.matches(record.name.as_str()))
            .collect();
        matching.sort_by(|a, b| compare(a, b, SortField::Name));
        matching.truncate(limit as usize);
        Ok(matching)
    }
}

#[async_trait]
impl ToolRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Tool>> {
        Ok(self.tool(id))
    }

    async fn find_by_website_or_repository(
        &self,
        website: &WebUrl,
        repository: &WebUrl,
    ) -> DomainResult<Option<Tool>> {
        Ok(self
            .tools()
            .into_iter()
            .find(|t| t.website == *website || t.repository == *repository))
    }

    async fn insert(&self, tool: NewTool) -> DomainResult<Tool> {
        let mut state = self.state.lock().unwrap();
        if state.tool_slug_taken(&tool.slug, None) {
            return Err(DomainError::DuplicateSlug("tools_slug_key violated".into()));
        }

        let id = state.next_id();
        let stored = Tool {
            id,
            name: tool.name,
            slug: tool.slug,
            website: tool.website,
            repository: tool.repository,
            description: tool.description,
            submitter_name: tool.submitter_name,
            submitter_email: tool.submitter_email,
            status: tool.status,
            published_at: tool.published_at,
            category_ids: tool.category_ids,
            alternative_ids: tool.alternative_ids,
            created_at: tool.created_at,
            updated_at: tool.created_at,
        };
        state.tools.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ToolUpdate) -> DomainResult<Tool> {
        let mut state = self.state.lock().unwrap();
        if let Some(slug) = &update.slug {
            if state.tool_slug_taken(slug, Some(update.id)) {
                return Err(DomainError::DuplicateSlug("tools_slug_key violated".into()));
            }
        }

        let tool = state
            .tools
            .iter_mut()
            .find(|t| t.id == update.id)
            .ok_or_else(|| DomainError::NotFound("tool not found".into()))?;

        if let Some(name) = update.name {
            tool.name = name;
        }
        if let Some(slug) = update.slug {
            tool.slug = slug;
        }
        if let Some(website) = update.website {
            tool.website = website;
        }
        if let Some(repository) = update.repository {
            tool.repository = repository;
        }
        if let Some(description) = update.description {
            tool.description = description;
        }
        if let Some(status) = update.status {
            tool.status = status;
        }
        if let Some(published_at) = update.published_at {
            tool.published_at = Some(published_at);
        }
        if let Some(ids) = update.category_ids {
            tool.category_ids = ids;
        }
        if let Some(ids) = update.alternative_ids {
            tool.alternative_ids = ids;
        }
        tool.updated_at = update.updated_at;

        Ok(tool.clone())
    }

    async fn update_many(
        &self,
        ids: &[RecordId],
        patch: &ToolPatch,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let mut state = self.state.lock().unwrap();
        let mut affected = 0;
        for tool in state.tools.iter_mut().filter(|t| ids.contains(&t.id)) {
            if let Some(status) = patch.status {
                tool.status = status;
            }
            if let Some(published_at) = patch.published_at {
                tool.published_at = Some(published_at);
            }
            tool.updated_at = updated_at;
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete_many(&self, ids: &[RecordId]) -> DomainResult<Vec<Slug>> {
        let mut state = self.state.lock().unwrap();
        let (removed, kept): (Vec<Tool>, Vec<Tool>) = std::mem::take(&mut state.tools)
            .into_iter()
            .partition(|t| ids.contains(&t.id));
        state.tools = kept;
        Ok(removed.into_iter().map(|t| t.slug).collect())
    }
}
