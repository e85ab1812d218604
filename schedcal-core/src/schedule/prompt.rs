//! Prompt construction for the scheduling service.

use chrono::NaiveDate;

/// System message sent with every scheduling request.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that schedules tasks for optimal productivity.";

/// Scheduling policy embedded in every request prompt.
#[derive(Debug, Clone)]
pub struct SchedulePolicy {
    /// Window used when the task list does not specify times.
    pub default_start: String,
    pub default_end: String,
    pub lunch_window: (String, String),
    pub dinner_window: (String, String),
    /// Nominal meal length in minutes, preparation included.
    pub meal_minutes: u32,
    pub break_min_minutes: u32,
    pub break_max_minutes: u32,
    /// Prefer start/end times that fall on whole hours.
    pub whole_hours: bool,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            default_start: "09:00".to_string(),
            default_end: "10:00".to_string(),
            lunch_window: ("12:00".to_string(), "14:00".to_string()),
            dinner_window: ("18:00".to_string(), "20:00".to_string()),
            meal_minutes: 60,
            break_min_minutes: 30,
            break_max_minutes: 60,
            whole_hours: true,
        }
    }
}

/// Build the instruction text for one scheduling request.
///
/// The text embeds the user's task list, the current date (used when the
/// list under-specifies dates), the policy directives, and the output
/// contract the reply parser depends on: a bare JSON array of
/// `task_name`/`date`/`start_time`/`end_time` objects.
pub fn build_prompt(free_text: &str, current_date: NaiveDate, policy: &SchedulePolicy) -> String {
    let whole_hours_line = if policy.whole_hours {
        "- Prefer start and end times that fall on whole hours.\n"
    } else {
        ""
    };

    format!(
        "Schedule these tasks: {free_text}\n\
         \n\
         Consider the following:\n\
         - Allocate more time for complex tasks.\n\
         - Start with the most important tasks first.\n\
         - Schedule breaks between tasks; never schedule tasks back-to-back without one.\n\
         - Breaks should be between {break_min} minutes and {break_max} minutes, depending on the intensity of the previous and the next task.\n\
         - Reserve about {meal} minutes each for lunch and dinner, preparation included. Lunch should ideally fall between {lunch_start} and {lunch_end}, dinner between {dinner_start} and {dinner_end}.\n\
         {whole_hours_line}\
         - If the user states an explicit date or time for a task, keep it exactly as stated.\n\
         - Only schedule tasks that appear in the list above; never invent tasks.\n\
         - Optimize for productivity without overloading the schedule.\n\
         \n\
         If the user doesn't specify dates or times, use the current date ({date}), with default start time {default_start} and end time {default_end}.\n\
         Ensure that each task's end time is after its start time.\n\
         \n\
         Return the schedule as a JSON array with no surrounding prose or other text:\n\
         [\n\
         {{\n\
         \x20   \"task_name\": \"Task Name\",\n\
         \x20   \"date\": \"YYYY-MM-DD\",\n\
         \x20   \"start_time\": \"HH:MM\",\n\
         \x20   \"end_time\": \"HH:MM\"\n\
         }}\n\
         ]",
        free_text = free_text,
        break_min = policy.break_min_minutes,
        break_max = policy.break_max_minutes,
        meal = policy.meal_minutes,
        lunch_start = policy.lunch_window.0,
        lunch_end = policy.lunch_window.1,
        dinner_start = policy.dinner_window.0,
        dinner_end = policy.dinner_window.1,
        date = current_date.format("%Y-%m-%d"),
        default_start = policy.default_start,
        default_end = policy.default_end,
    )
}
