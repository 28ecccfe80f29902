use std::time::{Duration, Instant};

use chrono::NaiveDate;
use cosmic::app::{Core, Task as CosmicTask};
use cosmic::iced::widget::scrollable::{self, AbsoluteOffset};
use cosmic::iced::{Event, Subscription, event, mouse, touch, window};
use cosmic::widget::{self, icon, nav_bar};
use cosmic::{Application, Element, executor};

use mealplan::config::MealPlanConfig;
use mealplan::core::assignment::{MealPlan, RecipeRef};
use mealplan::core::carousel::GestureCarousel;
use mealplan::core::day_grid::DayKey;
use mealplan::core::deletion::DeletionConfirm;
use mealplan::core::gesture::PanTracker;
use mealplan::core::grocery::GroceryList;
use mealplan::core::recipe::SavedRecipes;
use mealplan::org;

use crate::message::{Message, Page};
use crate::pages;

pub const APP_ID: &str = "dev.mealplan.app";

/// Bounds on the width of one week slide in the calendar strip.
const MIN_SLIDE_WIDTH: f32 = 280.0;
const MAX_SLIDE_WIDTH: f32 = 380.0;

/// Horizontal padding around the calendar page content.
const PAGE_PADDING: f32 = 16.0;

/// Nominal frame interval for the settle animation.
const FRAME: Duration = Duration::from_millis(16);

/// Horizontal travel beyond which a press counts as a swipe, not a tap.
const TAP_SLOP: f32 = 8.0;

pub struct Flags {
    pub config: MealPlanConfig,
}

pub struct MealPlanner {
    core: Core,
    nav_model: nav_bar::Model,
    config: MealPlanConfig,
    page: Page,
    today: NaiveDate,

    // Week carousel
    carousel: GestureCarousel,
    strip_id: widget::Id,
    pan: Option<PanTracker>,
    pan_travel: f32,
    pointer_x: f32,
    last_tick: Option<Instant>,

    // Meal plan
    meal_plan: MealPlan,
    deletion: DeletionConfirm,
    selected_day: Option<NaiveDate>,

    // Saved recipes
    saved_recipes: SavedRecipes,
    search_query: String,

    // Groceries
    groceries: GroceryList,
}

impl Application for MealPlanner {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let config = flags.config;

        if let Err(e) = config.ensure_files() {
            log::error!("Failed to create data directory: {}", e);
        }

        let mut nav_model = nav_bar::Model::default();
        for page in Page::ALL {
            nav_model
                .insert()
                .text(page.title())
                .icon(icon::from_name(page.icon_name()).icon())
                .data(*page);
        }

        let meal_plan = org::load_meal_plan(&config.meal_plan_path()).unwrap_or_else(|e| {
            log::error!("Failed to load meal plan: {}", e);
            MealPlan::new()
        });
        let groceries = org::load_groceries(&config.groceries_path()).unwrap_or_else(|e| {
            log::error!("Failed to load groceries: {}", e);
            GroceryList::new()
        });
        let saved_recipes = SavedRecipes::load(&config.saved_recipes_path()).unwrap_or_else(|e| {
            log::error!("Failed to load saved recipes: {}", e);
            SavedRecipes::new()
        });

        // The window of weeks is fixed for the whole session.
        let today = chrono::Local::now().date_naive();
        let carousel = GestureCarousel::new(today, MAX_SLIDE_WIDTH, config.carousel_config());
        log::info!(
            "Loaded {} planned days, {} saved recipes, {} groceries",
            meal_plan.len(),
            saved_recipes.all().len(),
            groceries.items().len()
        );

        let app = Self {
            core,
            nav_model,
            config,
            page: Page::Calendar,
            today,
            carousel,
            strip_id: widget::Id::unique(),
            pan: None,
            pan_travel: 0.0,
            pointer_x: 0.0,
            last_tick: None,
            meal_plan,
            deletion: DeletionConfirm::new(),
            selected_day: None,
            saved_recipes,
            search_query: String::new(),
            groceries,
        };
        let task = app.scroll_strip();

        (app, task)
    }

    fn nav_model(&self) -> Option<&nav_bar::Model> {
        Some(&self.nav_model)
    }

    fn on_nav_select(&mut self, id: nav_bar::Id) -> CosmicTask<Message> {
        if let Some(page) = self.nav_model.data::<Page>(id).cloned() {
            self.page = page;
            self.search_query.clear();
            self.nav_model.activate(id);
            // The press that reached the nav bar may have started a pan.
            self.abandon_pan();
            if page == Page::Calendar {
                return self.scroll_strip();
            }
        }
        CosmicTask::none()
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            Message::CursorMoved(x) => {
                self.pointer_x = x;
                if let Some(pan) = self.pan.as_mut() {
                    let translation = pan.sample(x, Instant::now());
                    self.pan_travel = self.pan_travel.max(translation.abs());
                    self.carousel.gesture_update(translation);
                    return self.scroll_strip();
                }
            }

            Message::PointerPressed(x) => {
                if !self.accepts_gestures() {
                    return CosmicTask::none();
                }
                let x = x.unwrap_or(self.pointer_x);
                self.pointer_x = x;
                self.pan = Some(PanTracker::begin(x, Instant::now()));
                self.pan_travel = 0.0;
                self.last_tick = None;
                self.carousel.gesture_start();
            }

            Message::PointerReleased(x) => {
                if let Some(pan) = self.pan.take() {
                    let x = x.unwrap_or(self.pointer_x);
                    let release = pan.release(x, Instant::now());
                    self.pan_travel = self.pan_travel.max(release.translation.abs());
                    self.carousel.gesture_update(release.translation);
                    let outcome = self.carousel.gesture_end(release.translation, release.velocity);
                    if outcome.index_changed {
                        log::debug!("Showing week of {}", self.carousel.active_anchor());
                    }
                    return self.scroll_strip();
                }
            }

            Message::WindowResized(width) => {
                let slide = (width - 2.0 * PAGE_PADDING).clamp(MIN_SLIDE_WIDTH, MAX_SLIDE_WIDTH);
                if (slide - self.carousel.slide_width()).abs() >= 1.0 {
                    self.carousel.set_slide_width(slide);
                    return self.scroll_strip();
                }
            }

            Message::StripScrolled(x) => {
                // Wheel and touchpad scrolling move the strip on their own.
                if (x - self.strip_x()).abs() > 0.5 {
                    return self.scroll_strip();
                }
            }

            Message::AnimationTick(now) => {
                let dt = self
                    .last_tick
                    .map(|last| now.saturating_duration_since(last))
                    .unwrap_or(FRAME);
                self.last_tick = if self.carousel.tick(dt) { Some(now) } else { None };
                return self.scroll_strip();
            }

            Message::SelectDay(date) => {
                // A swipe that ends over a day row must not also select it.
                if self.pan_travel > TAP_SLOP {
                    return CosmicTask::none();
                }
                if self.selected_day == Some(date) {
                    self.selected_day = None;
                } else {
                    self.selected_day = Some(date);
                }
            }

            Message::RequestDelete(key) => {
                if self.deletion.open(key) {
                    self.abandon_pan();
                    return self.scroll_strip();
                }
            }

            Message::ConfirmDelete => {
                if self.deletion.confirm(&mut self.meal_plan).is_some() {
                    self.save_meal_plan();
                }
                return self.scroll_strip();
            }

            Message::CancelDelete => {
                self.deletion.cancel();
                return self.scroll_strip();
            }

            Message::SearchQueryChanged(query) => {
                self.search_query = query;
            }

            Message::PlanRecipe(id) => {
                let recipe = self.saved_recipes.get(id).map(RecipeRef::from);
                if let (Some(day), Some(recipe)) = (self.selected_day, recipe) {
                    log::info!("Planning {} on {}", recipe.title, day);
                    self.meal_plan.assign(DayKey(day), recipe);
                    self.save_meal_plan();
                }
            }

            Message::RemoveSavedRecipe(id) => {
                if self.saved_recipes.remove(id) {
                    self.save_saved_recipes();
                }
            }

            Message::GroceryAdd => {
                // Leaving a blank item behind counts as abandoning it.
                let blank: Vec<_> = self
                    .groceries
                    .items()
                    .iter()
                    .filter(|i| i.editing)
                    .map(|i| i.id)
                    .collect();
                for id in blank {
                    self.groceries.prune_blank(id);
                }
                self.groceries.add();
            }

            Message::GroceryRename(id, name) => {
                self.groceries.rename(id, name);
            }

            Message::GrocerySubmit(id) => {
                self.groceries.finish_editing(id);
                self.groceries.prune_blank(id);
                self.save_groceries();
            }

            Message::GroceryToggle(id) => {
                self.groceries.toggle_crossed_out(id);
                self.save_groceries();
            }

            Message::GroceryRemove(id) => {
                self.groceries.remove(id);
                self.save_groceries();
            }
        }

        CosmicTask::none()
    }

    fn on_escape(&mut self) -> CosmicTask<Message> {
        if self.deletion.cancel().is_some() {
            return self.scroll_strip();
        }
        CosmicTask::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let pointer = event::listen_with(pointer_message);

        if self.carousel.is_animating() {
            Subscription::batch(vec![
                pointer,
                cosmic::iced::time::every(FRAME).map(Message::AnimationTick),
            ])
        } else {
            pointer
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match self.page {
            Page::Calendar => pages::calendar::calendar_view(
                &self.carousel,
                &self.meal_plan,
                &self.deletion,
                self.today,
                self.selected_day,
                &self.strip_id,
            ),
            Page::SavedRecipes => pages::saved_recipes::saved_recipes_view(
                &self.saved_recipes,
                &self.search_query,
                self.selected_day,
            ),
            Page::Groceries => pages::groceries::groceries_view(&self.groceries),
        }
    }
}

impl MealPlanner {
    fn accepts_gestures(&self) -> bool {
        self.page == Page::Calendar && !self.deletion.is_open()
    }

    /// Drop an unfinished pan and let the carousel settle back.
    fn abandon_pan(&mut self) {
        if self.pan.take().is_some() {
            self.last_tick = None;
            self.carousel.gesture_cancel();
        }
    }

    /// Where the week strip should be scrolled for the current frame.
    fn strip_x(&self) -> f32 {
        let frame = self.carousel.frame();
        frame.scroll_x(pages::calendar::edge_gutter(frame.slide_width))
    }

    /// Publish the carousel offset to the week strip.
    fn scroll_strip(&self) -> CosmicTask<Message> {
        scrollable::scroll_to(self.strip_id.clone(), AbsoluteOffset { x: self.strip_x(), y: 0.0 })
    }

    fn save_meal_plan(&self) {
        if let Err(e) = org::save_meal_plan(&self.config.meal_plan_path(), &self.meal_plan) {
            log::error!("Failed to save meal plan: {}", e);
        }
    }

    fn save_groceries(&self) {
        if let Err(e) = org::save_groceries(&self.config.groceries_path(), &self.groceries) {
            log::error!("Failed to save groceries: {}", e);
        }
    }

    fn save_saved_recipes(&self) {
        if let Err(e) = self.saved_recipes.store(&self.config.saved_recipes_path()) {
            log::error!("Failed to save saved recipes: {}", e);
        }
    }
}

/// Map raw pointer events to carousel input. Day rows capture presses, so
/// pans start regardless of event status.
fn pointer_message(event: Event, _status: event::Status, _id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size.width)),
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::CursorMoved(position.x)),
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerPressed(None))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => Some(Message::PointerReleased(None)),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::PointerPressed(Some(position.x)))
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) => Some(Message::CursorMoved(position.x)),
        Event::Touch(touch::Event::FingerLifted { position, .. } | touch::Event::FingerLost { position, .. }) => {
            Some(Message::PointerReleased(Some(position.x)))
        }
        _ => None,
    }
}
