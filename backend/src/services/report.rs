//! HTML report rendering for the emailed treatment schedule
//!
//! Produces a self-contained HTML document. The status column always shows
//! the literal "Not Completed" regardless of the entry's completed flag; the
//! flag is surfaced to API consumers only. Interpolated values are not
//! HTML-escaped.

use crate::models::{RecommendationRequest, ScheduleEntry};

/// Render the treatment schedule report as an HTML document
pub fn render_schedule_email(
    request: &RecommendationRequest,
    schedules: &[ScheduleEntry],
) -> String {
    let rows: String = schedules
        .iter()
        .map(|entry| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>Not Completed</td></tr>",
                entry.pesticide_name, entry.scheduled_date
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8">
    <style>
      body {{
        font-family: Arial, sans-serif;
        background: #f9fafb;
        margin: 0;
        padding: 20px;
        color: #333;
      }}
      .container {{
        max-width: 600px;
        margin: auto;
        background: #ffffff;
        border-radius: 12px;
        overflow: hidden;
        box-shadow: 0 4px 12px rgba(0,0,0,0.1);
      }}
      .header {{
        background: linear-gradient(90deg, #16a34a, #4ade80);
        padding: 20px;
        color: white;
        text-align: center;
      }}
      .header h1 {{
        margin: 0;
        font-size: 22px;
      }}
      .details {{
        padding: 20px;
        font-size: 14px;
        line-height: 1.6;
      }}
      .details strong {{
        color: #16a34a;
      }}
      table {{
        width: 100%;
        border-collapse: collapse;
        margin-top: 10px;
      }}
      table th, table td {{
        border: 1px solid #e5e7eb;
        padding: 10px;
        text-align: left;
      }}
      table th {{
        background: #f3f4f6;
        font-size: 13px;
        text-transform: uppercase;
      }}
      table tr:nth-child(even) {{
        background: #f9fafb;
      }}
      .footer {{
        text-align: center;
        font-size: 12px;
        color: #6b7280;
        padding: 15px;
        background: #f3f4f6;
      }}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="header">
        <h1>🌱 Farmcare Treatment Schedule</h1>
      </div>
      <div class="details">
        <p><strong>Plant:</strong> {plant_name}</p>
        <p><strong>Disease:</strong> {predicted_class} ({disease_percentage}%)</p>
        <p><strong>Acres:</strong> {acres} | <strong>Location:</strong> {location}</p>
        <h3>🧾 Recommended Schedule:</h3>
        <table>
          <tr>
            <th>Pesticide</th>
            <th>Date</th>
            <th>Status</th>
          </tr>
          {rows}
        </table>
      </div>
      <div class="footer">
        <p>💡 Tip: Follow this schedule carefully for best results.<br>
        Powered by Farmcare AI Assistant.</p>
      </div>
    </div>
  </body>
</html>
"#,
        plant_name = request.plant_name,
        predicted_class = request.predicted_class,
        disease_percentage = request.disease_percentage,
        acres = request.acres,
        location = request.location,
        rows = rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request() -> RecommendationRequest {
        RecommendationRequest {
            plant_name: "Tomato".to_string(),
            disease_percentage: 42.5,
            previous_fertilizers: Some("Urea".to_string()),
            acres: 3.0,
            location: "Nashik".to_string(),
            predicted_class: "Early Blight".to_string(),
            email: "farmer@example.com".to_string(),
        }
    }

    fn entry(name: &str, date: (i32, u32, u32)) -> ScheduleEntry {
        ScheduleEntry {
            pesticide_name: name.to_string(),
            scheduled_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            completed: false,
        }
    }

    #[test]
    fn test_report_embeds_request_details() {
        let html = render_schedule_email(&request(), &[]);

        assert!(html.contains("<strong>Plant:</strong> Tomato"));
        assert!(html.contains("<strong>Disease:</strong> Early Blight (42.5%)"));
        assert!(html.contains("<strong>Acres:</strong> 3"));
        assert!(html.contains("<strong>Location:</strong> Nashik"));
    }

    #[test]
    fn test_one_row_per_entry_with_iso_date() {
        let entries = [entry("Mancozeb", (2024, 3, 1)), entry("Copper", (2024, 3, 8))];
        let html = render_schedule_email(&request(), &entries);

        assert!(html.contains("<tr><td>Mancozeb</td><td>2024-03-01</td><td>Not Completed</td></tr>"));
        assert!(html.contains("<tr><td>Copper</td><td>2024-03-08</td><td>Not Completed</td></tr>"));
    }

    #[test]
    fn test_status_label_is_static() {
        let mut done = entry("Mancozeb", (2024, 3, 1));
        done.completed = true;

        let html = render_schedule_email(&request(), &[done]);
        assert!(html.contains("<td>Not Completed</td>"));
        assert!(!html.contains("<td>Completed</td>"));
    }

    #[test]
    fn test_values_are_not_escaped() {
        let mut request = request();
        request.plant_name = "<b>Tomato</b>".to_string();

        let html = render_schedule_email(&request, &[]);
        assert!(html.contains("<strong>Plant:</strong> <b>Tomato</b>"));
    }
}
