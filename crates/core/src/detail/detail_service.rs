//! Aggregation service for the entity detail view.

use log::{debug, warn};
use std::sync::{Arc, Mutex, RwLock};
use tokio::task::JoinHandle;

use super::detail_fallbacks::FallbackCatalog;
use super::detail_fetch::FetchSlot;
use super::detail_fields::DisplayFields;
use super::detail_model::{ActionKind, ActionOutcome, ActionStatus, DetailViewModel};
use super::detail_panels::{ActivePanel, PanelView};
use super::detail_traits::DetailGateway;
use crate::constants::{
    ACTIVATE_ERROR, INSTRUMENTS_FETCH_ERROR, PROFILE_FETCH_ERROR, SUSPEND_ERROR,
    TRANSACTIONS_FETCH_ERROR,
};
use crate::errors::{Result, ValidationError};
use crate::holders::{summarize_capabilities, AccountHolderProfile};
use crate::instruments::PaymentInstrument;
use crate::transactions::Transaction;

/// Mutable state of one detail view session. Guarded by the service's
/// lock, which is held only for synchronous reads and writes, never
/// across an await.
struct DetailState {
    entity_id: Option<String>,
    /// Incremented on every identifier change; in-flight results carrying
    /// an older epoch are dropped at commit time
    epoch: u64,
    profile: FetchSlot<AccountHolderProfile>,
    instruments: FetchSlot<Vec<PaymentInstrument>>,
    transactions: FetchSlot<Vec<Transaction>>,
    active_panel: ActivePanel,
    activate: ActionOutcome,
    suspend: ActionOutcome,
}

impl DetailState {
    fn new() -> Self {
        DetailState {
            entity_id: None,
            epoch: 0,
            profile: FetchSlot::Idle,
            instruments: FetchSlot::Idle,
            transactions: FetchSlot::Idle,
            active_panel: ActivePanel::default(),
            activate: ActionOutcome::idle(ActionKind::Activate),
            suspend: ActionOutcome::idle(ActionKind::Suspend),
        }
    }
}

/// Service aggregating an account holder's profile, payment instruments,
/// and transactions into one display model, and invoking lifecycle
/// actions against it.
pub struct DetailService {
    gateway: Arc<dyn DetailGateway>,
    fallbacks: FallbackCatalog,
    state: Arc<RwLock<DetailState>>,
    inflight: Mutex<Vec<JoinHandle<()>>>,
}

impl DetailService {
    /// Creates a new DetailService instance
    pub fn new(gateway: Arc<dyn DetailGateway>, fallbacks: FallbackCatalog) -> Self {
        Self {
            gateway,
            fallbacks,
            state: Arc::new(RwLock::new(DetailState::new())),
            inflight: Mutex::new(Vec::new()),
        }
    }

    /// Switches the view to a new entity: bumps the epoch, resets the
    /// three source slots to Pending and both action outcomes to Idle,
    /// and issues all three fetches concurrently. The active panel is
    /// left as the user set it.
    pub fn on_identifier_change(&self, entity_id: &str) -> Result<()> {
        if entity_id.is_empty() {
            return Err(
                ValidationError::InvalidInput("Entity identifier cannot be empty".to_string())
                    .into(),
            );
        }

        let epoch = {
            let mut state = self.state.write().unwrap();
            state.epoch += 1;
            state.entity_id = Some(entity_id.to_string());
            state.profile = FetchSlot::Pending;
            state.instruments = FetchSlot::Pending;
            state.transactions = FetchSlot::Pending;
            state.activate = ActionOutcome::idle(ActionKind::Activate);
            state.suspend = ActionOutcome::idle(ActionKind::Suspend);
            state.epoch
        };

        debug!("Loading entity {} (epoch {})", entity_id, epoch);

        let mut inflight = self.inflight.lock().unwrap();
        inflight.retain(|handle| !handle.is_finished());
        inflight.push(self.spawn_profile_fetch(entity_id.to_string(), epoch));
        inflight.push(self.spawn_instruments_fetch(entity_id.to_string(), epoch));
        inflight.push(self.spawn_transactions_fetch(entity_id.to_string(), epoch));

        Ok(())
    }

    fn spawn_profile_fetch(&self, entity_id: String, epoch: u64) -> JoinHandle<()> {
        let gateway = self.gateway.clone();
        let state = self.state.clone();

        tokio::spawn(async move {
            let result = gateway.fetch_profile(&entity_id).await;
            let mut state = state.write().unwrap();
            if state.epoch != epoch {
                debug!("Dropping stale profile result for entity {}", entity_id);
                return;
            }
            match result {
                Ok(profile) => state.profile = FetchSlot::resolved(profile),
                Err(e) => {
                    warn!("Profile fetch failed for entity {}: {}", entity_id, e);
                    state.profile = FetchSlot::Rejected(PROFILE_FETCH_ERROR.to_string());
                }
            }
        })
    }

    fn spawn_instruments_fetch(&self, entity_id: String, epoch: u64) -> JoinHandle<()> {
        let gateway = self.gateway.clone();
        let state = self.state.clone();
        let seed = self.fallbacks.instruments.clone();

        tokio::spawn(async move {
            let result = gateway.fetch_instruments(&entity_id).await;
            let mut state = state.write().unwrap();
            if state.epoch != epoch {
                debug!("Dropping stale instruments result for entity {}", entity_id);
                return;
            }
            match result {
                Ok(Some(instruments)) => state.instruments = FetchSlot::resolved(instruments),
                Ok(None) => {
                    debug!("No instrument data for entity {}, seeding fallback", entity_id);
                    state.instruments = FetchSlot::resolved(seed);
                }
                Err(e) => {
                    warn!("Instruments fetch failed for entity {}: {}", entity_id, e);
                    state.instruments = FetchSlot::Rejected(INSTRUMENTS_FETCH_ERROR.to_string());
                }
            }
        })
    }

    fn spawn_transactions_fetch(&self, entity_id: String, epoch: u64) -> JoinHandle<()> {
        let gateway = self.gateway.clone();
        let state = self.state.clone();

        tokio::spawn(async move {
            let result = gateway.fetch_transactions(&entity_id).await;
            let mut state = state.write().unwrap();
            if state.epoch != epoch {
                debug!("Dropping stale transactions result for entity {}", entity_id);
                return;
            }
            match result {
                Ok(transactions) => state.transactions = FetchSlot::resolved(transactions),
                Err(e) => {
                    warn!("Transactions fetch failed for entity {}: {}", entity_id, e);
                    state.transactions = FetchSlot::Rejected(TRANSACTIONS_FETCH_ERROR.to_string());
                }
            }
        })
    }

    /// Activates the account holder and merges the result into the view.
    pub async fn activate(&self, entity_id: &str) -> Result<ActionOutcome> {
        self.invoke_action(ActionKind::Activate, entity_id).await
    }

    /// Suspends the account holder and merges the result into the view.
    pub async fn suspend(&self, entity_id: &str) -> Result<ActionOutcome> {
        self.invoke_action(ActionKind::Suspend, entity_id).await
    }

    /// Runs one lifecycle action: marks its outcome Pending, issues the
    /// call, and commits the result if the epoch is still current. On
    /// success only the profile's status field is patched; the rest of
    /// the response is ignored and no re-fetch is issued.
    async fn invoke_action(&self, kind: ActionKind, entity_id: &str) -> Result<ActionOutcome> {
        if entity_id.is_empty() {
            return Err(
                ValidationError::InvalidInput("Entity identifier cannot be empty".to_string())
                    .into(),
            );
        }

        let epoch = {
            let mut state = self.state.write().unwrap();
            let pending = ActionOutcome {
                kind,
                status: ActionStatus::Pending,
                resulting_status: None,
                error_message: None,
            };
            match kind {
                ActionKind::Activate => state.activate = pending,
                ActionKind::Suspend => state.suspend = pending,
            }
            state.epoch
        };

        let result = match kind {
            ActionKind::Activate => self.gateway.activate(entity_id).await,
            ActionKind::Suspend => self.gateway.suspend(entity_id).await,
        };

        let mut state = self.state.write().unwrap();
        if state.epoch != epoch {
            debug!("Dropping stale {:?} result for entity {}", kind, entity_id);
            let current = match kind {
                ActionKind::Activate => state.activate.clone(),
                ActionKind::Suspend => state.suspend.clone(),
            };
            return Ok(current);
        }

        let outcome = match result {
            Ok(resulting_status) => {
                if let Some(new_status) = &resulting_status {
                    if let FetchSlot::Resolved { value: profile, .. } = &mut state.profile {
                        profile.status = Some(new_status.clone());
                    }
                }
                ActionOutcome {
                    kind,
                    status: ActionStatus::Succeeded,
                    resulting_status,
                    error_message: None,
                }
            }
            Err(e) => {
                warn!("{:?} failed for entity {}: {}", kind, entity_id, e);
                let message = match kind {
                    ActionKind::Activate => ACTIVATE_ERROR,
                    ActionKind::Suspend => SUSPEND_ERROR,
                };
                ActionOutcome {
                    kind,
                    status: ActionStatus::Failed,
                    resulting_status: None,
                    error_message: Some(message.to_string()),
                }
            }
        };

        match kind {
            ActionKind::Activate => state.activate = outcome.clone(),
            ActionKind::Suspend => state.suspend = outcome.clone(),
        }
        Ok(outcome)
    }

    /// Read-only snapshot of the merged view model.
    pub fn current_model(&self) -> DetailViewModel {
        let state = self.state.read().unwrap();

        let fields = DisplayFields::resolve(
            state.profile.value(),
            state.entity_id.as_deref(),
            &self.fallbacks,
        );
        let capabilities = match state.profile.value().and_then(|p| p.capabilities.as_ref()) {
            Some(capabilities) => summarize_capabilities(capabilities),
            None => summarize_capabilities(&self.fallbacks.capabilities),
        };

        DetailViewModel {
            entity_id: state.entity_id.clone(),
            fields,
            capabilities,
            profile: state.profile.view(),
            instruments: state.instruments.collection_view(),
            transactions: state.transactions.collection_view(),
            active_panel: state.active_panel,
            activate: state.activate.clone(),
            suspend: state.suspend.clone(),
        }
    }

    /// Sets the active panel. Out-of-range indices clamp to the last
    /// panel. Pure routing; no reads are issued.
    pub fn select_tab(&self, index: usize) -> ActivePanel {
        let mut state = self.state.write().unwrap();
        state.active_panel = ActivePanel::from_index(index);
        state.active_panel
    }

    /// Projection of the active panel.
    pub fn active_panel_view(&self) -> PanelView {
        PanelView::project(&self.current_model())
    }

    /// Identifier of the currently displayed entity.
    pub fn current_entity_id(&self) -> Option<String> {
        self.state.read().unwrap().entity_id.clone()
    }

    /// Awaits completion of every spawned fetch. Used by tests and
    /// graceful teardown.
    pub async fn await_inflight(&self) {
        let handles: Vec<JoinHandle<()>> = {
            let mut inflight = self.inflight.lock().unwrap();
            inflight.drain(..).collect()
        };
        let _ = futures::future::join_all(handles).await;
    }

    /// Aborts outstanding fetches and resets the session to its initial
    /// state.
    pub fn teardown(&self) {
        let handles: Vec<JoinHandle<()>> = {
            let mut inflight = self.inflight.lock().unwrap();
            inflight.drain(..).collect()
        };
        for handle in handles {
            handle.abort();
        }

        let mut state = self.state.write().unwrap();
        state.epoch += 1;
        state.entity_id = None;
        state.profile = FetchSlot::Idle;
        state.instruments = FetchSlot::Idle;
        state.transactions = FetchSlot::Idle;
        state.active_panel = ActivePanel::default();
        state.activate = ActionOutcome::idle(ActionKind::Activate);
        state.suspend = ActionOutcome::idle(ActionKind::Suspend);
    }
}
