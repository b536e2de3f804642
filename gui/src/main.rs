mod helpers;
mod messages;
mod state;
mod styles;
mod update;
mod views;

use std::sync::{Arc, Mutex};

use iced::theme::Palette;
use iced::widget::{button, column, container, opaque, row, stack, text, Space};
use iced::{Color, Element, Fill, Task, Theme};
use tracing_subscriber::EnvFilter;

use jota_staking::{
    Account, AccountStore, Catalog, ExplorerView, MarketSnapshot, OfflineBroadcaster, Settings,
    TracingAnalytics, TracingReporter, WizardDeps,
};
use jota_staking::{Broadcaster, LocalStakeBridge};

use messages::Message;
use state::Delegation;

// IOTA Explorer dark-mode palette (iota2.darkmode)
const BG:      Color = Color::from_rgb(0.051, 0.067, 0.090); // #0d1117
const SIDEBAR: Color = Color::from_rgb(0.024, 0.039, 0.063); // #060a10
const SURFACE: Color = Color::from_rgb(0.114, 0.157, 0.227); // #1d283a (iota2-gray-800)
const BORDER:  Color = Color::from_rgb(0.204, 0.259, 0.337); // #344256 (iota2-gray-700)
const ACTIVE:  Color = Color::from_rgb(0.086, 0.137, 0.251); // #162340
const MUTED:   Color = Color::from_rgb(0.396, 0.459, 0.545); // #65758b (iota2-gray-500)
const PRIMARY: Color = Color::from_rgb(0.145, 0.349, 0.961); // #2559f5 (iota2-blue-600)

const LOG_ENV: &str = "JOTA_STAKING_LOG";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application(App::new, App::update, App::view)
        .title("Jota Staking")
        .theme(App::theme)
        .run()
}

// -- App state --

struct App {
    settings: Settings,
    catalog: Catalog,
    explorer: ExplorerView,

    store: Option<Arc<Mutex<AccountStore>>>,
    accounts: Vec<Account>,
    market: MarketSnapshot,

    deps: WizardDeps,
    broadcaster: Arc<dyn Broadcaster>,

    /// Open delegation modal, if any.
    delegation: Option<Delegation>,

    clipboard: Option<arboard::Clipboard>,

    // UI state
    loading: u32,
    error_message: Option<String>,
    status_message: Option<String>,

    theme: Theme,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "settings unreadable, using defaults");
                Settings::default()
            })
            .apply_args(std::env::args().skip(1));
        tracing::info!(network = %settings.network, "starting");

        let mut explorer = ExplorerView::for_network(settings.network);
        if let Some(base) = &settings.explorer_url {
            explorer = explorer.with_base(base);
        }

        let mut error_message = None;
        let store = match AccountStore::open() {
            Ok(store) => Some(Arc::new(Mutex::new(store))),
            Err(e) => {
                error_message = Some(format!("Cannot open accounts: {e}"));
                None
            }
        };
        let accounts = store
            .as_ref()
            .and_then(|s| s.lock().ok().map(|s| s.list().to_vec()))
            .unwrap_or_default();

        let deps = WizardDeps {
            bridge: Arc::new(LocalStakeBridge::new(settings.estimated_fee)),
            analytics: Arc::new(TracingAnalytics),
            reporter: Arc::new(TracingReporter),
        };

        let mut app = Self {
            catalog: Catalog::for_locale(&settings.locale),
            explorer,
            store,
            accounts,
            market: MarketSnapshot::default(),
            deps,
            broadcaster: Arc::new(OfflineBroadcaster::new()),
            delegation: None,
            clipboard: arboard::Clipboard::new().ok(),
            loading: 0,
            error_message,
            status_message: None,
            theme: Theme::custom(
                "IOTA".to_string(),
                Palette {
                    background: BG,
                    text: Color::from_rgb(0.988, 0.988, 0.988),
                    primary: PRIMARY,
                    success: styles::ACCENT,
                    warning: styles::WARNING,
                    danger: styles::DANGER,
                },
            ),
            settings,
        };
        let load = app.load_market();
        (app, load)
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub(crate) fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog.t(key)
    }

    // -- Views --

    fn view(&self) -> Element<'_, Message> {
        let sidebar = self.view_sidebar();
        let content = column![
            self.view_accounts(),
            Space::new().height(20),
            self.view_provider_section(),
        ]
        .spacing(0);

        let base: Element<Message> = row![sidebar, container(content).padding(20).width(Fill)].into();

        match self.view_delegation_modal() {
            Some(modal) => stack![base, opaque(modal)].into(),
            None => base,
        }
    }

    fn view_sidebar(&self) -> Element<'_, Message> {
        let network = text(self.settings.network.to_string())
            .size(12)
            .color(MUTED);

        let mut refresh = button(text("Refresh market").size(13))
            .width(Fill)
            .style(styles::btn_secondary);
        if self.loading == 0 {
            refresh = refresh.on_press(Message::RefreshMarket);
        }

        let col = column![
            text("Jota").size(20).font(styles::BOLD),
            network,
            Space::new().height(Fill),
            refresh,
        ]
        .spacing(8)
        .padding(12)
        .width(iced::Length::Fixed(200.0));

        container(col)
            .height(Fill)
            .style(|_theme| container::Style {
                background: Some(iced::Background::Color(SIDEBAR)),
                ..Default::default()
            })
            .into()
    }
}
