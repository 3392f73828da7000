pub const INTAKE_FILE: &str = "intake.toml";

pub const INTAKE_TEMPLATE: &str = r#"# Founder intake for a capital readiness assessment.

[company]
name = "Acme Robotics"
founding_year = 2021
# Technology, Healthcare, Finance, Education, Retail, Manufacturing, Energy, Other
industry = "Technology"
product_description = "We build autonomous robots for warehouses. Our platform cuts picking costs in half!"

[team]
founder_count = 2
team_size = 8
tech_background_percentage = 60
previous_startups = 1

[traction]
monthly_revenue = 25000
user_count = 1500
growth_rate = 15

[location]
address = "1 Market St"
city = "San Francisco"
state = "CA"
postal_code = "94105"
"#;

pub const CONFIG_TEMPLATE: &str = r#"# Capital readiness configuration.

# Integer percentages; must sum to 100.
[scoring.weights]
operational_readiness = 20
team_strength = 20
market_fit = 20
narrative_and_innovation = 25
geo_ecosystem = 15

[ecosystem]
search_radius_km = 50.0
fallback_score = 0

[[places]]
city = "San Francisco"
state = "CA"
latitude = 37.7749
longitude = -122.4194
innovation_hubs = 5
vc_firms = 11
accelerators = 3
coworking_spaces = 10

[[places]]
city = "New York"
state = "NY"
latitude = 40.7128
longitude = -74.0060
innovation_hubs = 5
vc_firms = 12
accelerators = 3
coworking_spaces = 10

[[places]]
city = "Austin"
state = "TX"
latitude = 30.2672
longitude = -97.7431
innovation_hubs = 3
vc_firms = 6
accelerators = 2
coworking_spaces = 7

[[places]]
city = "Boston"
state = "MA"
latitude = 42.3601
longitude = -71.0589
innovation_hubs = 4
vc_firms = 9
accelerators = 3
coworking_spaces = 8
"#;
