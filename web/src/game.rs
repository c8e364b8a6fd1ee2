use crate::api::JService;
use crate::utils::*;
use clap::Args;
use std::collections::HashMap;
use trivia::ToCellId;
use trivia_core as trivia;
use trivia_protocol as protocol;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    BoardBuilt(trivia::BuildTicket, trivia::Result<trivia::Board>),
    Activate(trivia::ClueCoords),
}

fn start_label(phase: &trivia::SessionPhase) -> &'static str {
    use trivia::SessionPhase::*;
    match phase {
        Idle => "Start!",
        Loading => "Loading ...",
        Ready | Failed(_) => "Restart!",
    }
}

fn cell_class(style: trivia::CellStyle) -> Classes {
    use trivia::CellStyle::*;
    classes!(
        "cell",
        match style {
            Placeholder => classes!(),
            Question => classes!("question"),
            Answer => classes!("answer"),
        }
    )
}

/// What each cell currently shows, fed only by [`trivia::CellUpdate`]s.
#[derive(Debug, Default, PartialEq)]
struct CellTexts(HashMap<trivia::ClueCoords, (AttrValue, trivia::CellStyle)>);

impl CellTexts {
    fn apply(&mut self, update: trivia::CellUpdate) {
        let trivia::CellUpdate {
            coords,
            text,
            style,
        } = update;
        self.0.insert(coords, (text.into(), style));
    }

    fn get(&self, coords: trivia::ClueCoords) -> (AttrValue, trivia::CellStyle) {
        self.0.get(&coords).cloned().unwrap_or_else(|| {
            (
                AttrValue::from(trivia::PLACEHOLDER_TEXT),
                trivia::CellStyle::Placeholder,
            )
        })
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    coords: trivia::ClueCoords,
    text: AttrValue,
    style: trivia::CellStyle,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let id = props.coords.to_cell_id();
    let class = cell_class(props.style);
    html! {
        <td {id} {class}>{props.text.clone()}</td>
    }
}

/// Pure CSS spinner, styled by `.lds-roller`.
#[function_component]
fn LoadingView() -> Html {
    html! {
        <div id="loader">
            <div class="lds-roller">
                { for (0..8).map(|_| html! { <div/> }) }
            </div>
        </div>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force the seed of the first board, restarts pick a random one
    #[arg(short, long)]
    seed: Option<u64>,

    /// Base URL of the jService API
    #[arg(long, default_value = protocol::DEFAULT_API_BASE)]
    api: String,
}

impl GameProps {
    pub(crate) fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub(crate) fn api(&self) -> &str {
        &self.api
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: trivia::GameSession,
    source: JService,
    config: trivia::BoardConfig,
    cells: CellTexts,
    forced_seed: Option<u64>,
}

impl GameView {
    fn new(props: &GameProps) -> Self {
        Self {
            session: trivia::GameSession::new(),
            source: JService::new(&props.api),
            config: trivia::BoardConfig::default(),
            cells: CellTexts::default(),
            forced_seed: props.seed,
        }
    }

    fn next_seed(&mut self, random: impl FnOnce() -> u64) -> u64 {
        self.forced_seed.take().unwrap_or_else(random)
    }

    fn start_build(&mut self, ctx: &Context<Self>) -> bool {
        let ticket = match self.session.begin_build() {
            Ok(ticket) => ticket,
            Err(err) => {
                log::debug!("not starting: {}", err);
                return false;
            }
        };

        let seed = self.next_seed(random_seed);
        log::debug!("seed: {}", seed);
        let builder = trivia::BoardBuilder::new(self.config, seed);
        let source = self.source.clone();
        ctx.link().send_future(async move {
            let result = builder.build(&source).await;
            Msg::BoardBuilt(ticket, result)
        });
        true
    }

    fn activate(&mut self, coords: trivia::ClueCoords) -> bool {
        match self.session.activate(coords) {
            Ok(Some(update)) => {
                log::debug!("cell {:?} shows {:?}", update.coords, update.style);
                self.cells.apply(update);
                true
            }
            Ok(None) => false,
            Err(err) => {
                log::warn!("activation at {:?} rejected: {}", coords, err);
                false
            }
        }
    }

    fn view_board(&self, ctx: &Context<Self>, board: &trivia::Board) -> Html {
        // one handler for the whole body, the clicked cell is found by its id
        let onclick = ctx.link().batch_callback(|e: MouseEvent| {
            let cell = e.target_dyn_into::<web_sys::Element>()?;
            match trivia::parse_cell_id(&cell.id()) {
                Ok(coords) => Some(Msg::Activate(coords)),
                Err(err) => {
                    log::trace!("click outside a clue: {}", err);
                    None
                }
            }
        });

        html! {
            <table id="jeopardy">
                <thead>
                    <tr>
                        {
                            for board.categories().iter().map(|category| html! {
                                <td>{category.title().to_string()}</td>
                            })
                        }
                    </tr>
                </thead>
                <tbody {onclick}>
                    {
                        for (0..board.row_count()).map(|y| html! {
                            <tr>
                                {
                                    for (0..board.category_count()).map(|x| {
                                        let coords = (x, y);
                                        if board.validate_coords(coords).is_ok() {
                                            let (text, style) = self.cells.get(coords);
                                            html! { <CellView {coords} {text} {style}/> }
                                        } else {
                                            html! { <td/> }
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => self.start_build(ctx),
            BoardBuilt(ticket, result) => {
                let updated = self.session.finish_build(ticket, result);
                if updated && self.session.phase().is_playable() {
                    self.cells.clear();
                }
                updated
            }
            Activate(coords) => self.activate(coords),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let phase = self.session.phase();
        let loading = phase.is_loading();
        let cb_start = ctx.link().callback(|_: MouseEvent| Msg::Start);

        html! {
            <div class="trivia">
                <button id="start" onclick={cb_start} disabled={loading}>{start_label(phase)}</button>
                if loading {
                    <LoadingView/>
                }
                if let trivia::SessionPhase::Failed(err) = phase {
                    <p class="error">{format!("Could not load a board: {}", err)}</p>
                }
                if let Some(board) = self.session.board() {
                    { self.view_board(ctx, board) }
                    if board.is_fully_revealed() {
                        <p class="cleared">{"Board cleared!"}</p>
                    }
                }
            </div>
        }
    }
}
