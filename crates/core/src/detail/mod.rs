//! Detail module - entity detail aggregation, tabbed panels, and
//! lifecycle actions.

mod detail_fallbacks;
mod detail_fetch;
mod detail_fields;
mod detail_model;
mod detail_panels;
mod detail_service;
mod detail_traits;


// Re-export the public interface
pub use detail_fallbacks::FallbackCatalog;
pub use detail_fetch::{CollectionView, FetchSlot, SlotView};
pub use detail_fields::{resolve_field, DisplayFields};
pub use detail_model::{ActionKind, ActionOutcome, ActionStatus, DetailViewModel};
pub use detail_panels::{
    ActionsPanel, ActivePanel, BankAccountRow, CardRow, InstrumentsSection, OverviewPanel,
    PanelView, TransactionRow, TransactionsPanel,
};
pub use detail_service::DetailService;
pub use detail_traits::DetailGateway;
