/// A row of the built-in area-code table.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Row {
    Local {
        city: &'static str,
        state: &'static str,
        state_code: &'static str,
        country: &'static str,
    },
    NonGeographic,
}

impl Row {
    const fn local(
        city: &'static str,
        state: &'static str,
        state_code: &'static str,
        country: &'static str,
    ) -> Self {
        Row::Local {
            city,
            state,
            state_code,
            country,
        }
    }
}

/// North-American Numbering Plan area codes, sorted by code.
pub(crate) const ROWS: &[(&str, Row)] = &[
    ("201", Row::local("Jersey City", "New Jersey", "NJ", "US")),
    ("202", Row::local("Washington", "District of Columbia", "DC", "US")),
    ("203", Row::local("New Haven", "Connecticut", "CT", "US")),
    ("204", Row::local("Winnipeg", "Manitoba", "MB", "Canada")),
    ("205", Row::local("Birmingham", "Alabama", "AL", "US")),
    ("206", Row::local("Seattle", "Washington", "WA", "US")),
    ("207", Row::local("Portland", "Maine", "ME", "US")),
    ("208", Row::local("Boise", "Idaho", "ID", "US")),
    ("209", Row::local("Stockton", "California", "CA", "US")),
    ("210", Row::local("San Antonio", "Texas", "TX", "US")),
    ("212", Row::local("New York City", "New York", "NY", "US")),
    ("213", Row::local("Los Angeles", "California", "CA", "US")),
    ("214", Row::local("Dallas", "Texas", "TX", "US")),
    ("215", Row::local("Philadelphia", "Pennsylvania", "PA", "US")),
    ("216", Row::local("Cleveland", "Ohio", "OH", "US")),
    ("217", Row::local("Springfield", "Illinois", "IL", "US")),
    ("218", Row::local("Duluth", "Minnesota", "MN", "US")),
    ("219", Row::local("Gary", "Indiana", "IN", "US")),
    ("220", Row::local("Newark", "Ohio", "OH", "US")),
    ("223", Row::local("Lancaster", "Pennsylvania", "PA", "US")),
    ("224", Row::local("Evanston", "Illinois", "IL", "US")),
    ("225", Row::local("Baton Rouge", "Louisiana", "LA", "US")),
    ("226", Row::local("London", "Ontario", "ON", "Canada")),
    ("227", Row::local("Silver Spring", "Maryland", "MD", "US")),
    ("228", Row::local("Gulfport", "Mississippi", "MS", "US")),
    ("229", Row::local("Albany", "Georgia", "GA", "US")),
    ("231", Row::local("Muskegon", "Michigan", "MI", "US")),
    ("234", Row::local("Akron", "Ohio", "OH", "US")),
    ("236", Row::local("Vancouver", "British Columbia", "BC", "Canada")),
    ("239", Row::local("Fort Myers", "Florida", "FL", "US")),
    ("240", Row::local("Germantown", "Maryland", "MD", "US")),
    ("248", Row::local("Troy", "Michigan", "MI", "US")),
    ("249", Row::local("Sudbury", "Ontario", "ON", "Canada")),
    ("250", Row::local("Victoria", "British Columbia", "BC", "Canada")),
    ("251", Row::local("Mobile", "Alabama", "AL", "US")),
    ("252", Row::local("Greenville", "North Carolina", "NC", "US")),
    ("253", Row::local("Tacoma", "Washington", "WA", "US")),
    ("254", Row::local("Waco", "Texas", "TX", "US")),
    ("256", Row::local("Huntsville", "Alabama", "AL", "US")),
    ("260", Row::local("Fort Wayne", "Indiana", "IN", "US")),
    ("262", Row::local("Kenosha", "Wisconsin", "WI", "US")),
    ("263", Row::local("Montreal", "Quebec", "QC", "Canada")),
    ("267", Row::local("Philadelphia", "Pennsylvania", "PA", "US")),
    ("269", Row::local("Kalamazoo", "Michigan", "MI", "US")),
    ("270", Row::local("Bowling Green", "Kentucky", "KY", "US")),
    ("272", Row::local("Scranton", "Pennsylvania", "PA", "US")),
    ("274", Row::local("Green Bay", "Wisconsin", "WI", "US")),
    ("276", Row::local("Bristol", "Virginia", "VA", "US")),
    ("279", Row::local("Sacramento", "California", "CA", "US")),
    ("281", Row::local("Houston", "Texas", "TX", "US")),
    ("283", Row::local("Cincinnati", "Ohio", "OH", "US")),
    ("289", Row::local("Hamilton", "Ontario", "ON", "Canada")),
    ("301", Row::local("Silver Spring", "Maryland", "MD", "US")),
    ("302", Row::local("Wilmington", "Delaware", "DE", "US")),
    ("303", Row::local("Denver", "Colorado", "CO", "US")),
    ("304", Row::local("Charleston", "West Virginia", "WV", "US")),
    ("305", Row::local("Miami", "Florida", "FL", "US")),
    ("306", Row::local("Regina", "Saskatchewan", "SK", "Canada")),
    ("307", Row::local("Cheyenne", "Wyoming", "WY", "US")),
    ("308", Row::local("Grand Island", "Nebraska", "NE", "US")),
    ("309", Row::local("Peoria", "Illinois", "IL", "US")),
    ("310", Row::local("Santa Monica", "California", "CA", "US")),
    ("312", Row::local("Chicago", "Illinois", "IL", "US")),
    ("313", Row::local("Detroit", "Michigan", "MI", "US")),
    ("314", Row::local("St. Louis", "Missouri", "MO", "US")),
    ("315", Row::local("Syracuse", "New York", "NY", "US")),
    ("316", Row::local("Wichita", "Kansas", "KS", "US")),
    ("317", Row::local("Indianapolis", "Indiana", "IN", "US")),
    ("318", Row::local("Shreveport", "Louisiana", "LA", "US")),
    ("319", Row::local("Cedar Rapids", "Iowa", "IA", "US")),
    ("320", Row::local("St. Cloud", "Minnesota", "MN", "US")),
    ("321", Row::local("Orlando", "Florida", "FL", "US")),
    ("323", Row::local("Los Angeles", "California", "CA", "US")),
    ("325", Row::local("Abilene", "Texas", "TX", "US")),
    ("326", Row::local("Dayton", "Ohio", "OH", "US")),
    ("327", Row::local("Jonesboro", "Arkansas", "AR", "US")),
    ("330", Row::local("Akron", "Ohio", "OH", "US")),
    ("331", Row::local("Aurora", "Illinois", "IL", "US")),
    ("332", Row::local("New York City", "New York", "NY", "US")),
    ("334", Row::local("Montgomery", "Alabama", "AL", "US")),
    ("336", Row::local("Greensboro", "North Carolina", "NC", "US")),
    ("337", Row::local("Lafayette", "Louisiana", "LA", "US")),
    ("339", Row::local("Lynn", "Massachusetts", "MA", "US")),
    ("340", Row::local("Charlotte Amalie", "U.S. Virgin Islands", "VI", "US")),
    ("341", Row::local("Oakland", "California", "CA", "US")),
    ("343", Row::local("Ottawa", "Ontario", "ON", "Canada")),
    ("346", Row::local("Houston", "Texas", "TX", "US")),
    ("347", Row::local("New York City", "New York", "NY", "US")),
    ("350", Row::local("Stockton", "California", "CA", "US")),
    ("351", Row::local("Lowell", "Massachusetts", "MA", "US")),
    ("352", Row::local("Gainesville", "Florida", "FL", "US")),
    ("353", Row::local("Madison", "Wisconsin", "WI", "US")),
    ("354", Row::local("Granby", "Quebec", "QC", "Canada")),
    ("360", Row::local("Vancouver", "Washington", "WA", "US")),
    ("361", Row::local("Corpus Christi", "Texas", "TX", "US")),
    ("363", Row::local("Hempstead", "New York", "NY", "US")),
    ("364", Row::local("Bowling Green", "Kentucky", "KY", "US")),
    ("365", Row::local("Hamilton", "Ontario", "ON", "Canada")),
    ("367", Row::local("Quebec City", "Quebec", "QC", "Canada")),
    ("368", Row::local("Calgary", "Alberta", "AB", "Canada")),
    ("380", Row::local("Columbus", "Ohio", "OH", "US")),
    ("385", Row::local("Salt Lake City", "Utah", "UT", "US")),
    ("386", Row::local("Daytona Beach", "Florida", "FL", "US")),
    ("401", Row::local("Providence", "Rhode Island", "RI", "US")),
    ("402", Row::local("Omaha", "Nebraska", "NE", "US")),
    ("403", Row::local("Calgary", "Alberta", "AB", "Canada")),
    ("404", Row::local("Atlanta", "Georgia", "GA", "US")),
    ("405", Row::local("Oklahoma City", "Oklahoma", "OK", "US")),
    ("406", Row::local("Billings", "Montana", "MT", "US")),
    ("407", Row::local("Orlando", "Florida", "FL", "US")),
    ("408", Row::local("San Jose", "California", "CA", "US")),
    ("409", Row::local("Beaumont", "Texas", "TX", "US")),
    ("410", Row::local("Baltimore", "Maryland", "MD", "US")),
    ("412", Row::local("Pittsburgh", "Pennsylvania", "PA", "US")),
    ("413", Row::local("Springfield", "Massachusetts", "MA", "US")),
    ("414", Row::local("Milwaukee", "Wisconsin", "WI", "US")),
    ("415", Row::local("San Francisco", "California", "CA", "US")),
    ("416", Row::local("Toronto", "Ontario", "ON", "Canada")),
    ("417", Row::local("Springfield", "Missouri", "MO", "US")),
    ("418", Row::local("Quebec City", "Quebec", "QC", "Canada")),
    ("419", Row::local("Toledo", "Ohio", "OH", "US")),
    ("423", Row::local("Chattanooga", "Tennessee", "TN", "US")),
    ("424", Row::local("Santa Monica", "California", "CA", "US")),
    ("425", Row::local("Bellevue", "Washington", "WA", "US")),
    ("430", Row::local("Tyler", "Texas", "TX", "US")),
    ("431", Row::local("Winnipeg", "Manitoba", "MB", "Canada")),
    ("432", Row::local("Midland", "Texas", "TX", "US")),
    ("434", Row::local("Lynchburg", "Virginia", "VA", "US")),
    ("435", Row::local("St. George", "Utah", "UT", "US")),
    ("437", Row::local("Toronto", "Ontario", "ON", "Canada")),
    ("438", Row::local("Montreal", "Quebec", "QC", "Canada")),
    ("440", Row::local("Parma", "Ohio", "OH", "US")),
    ("442", Row::local("Oceanside", "California", "CA", "US")),
    ("443", Row::local("Baltimore", "Maryland", "MD", "US")),
    ("445", Row::local("Philadelphia", "Pennsylvania", "PA", "US")),
    ("447", Row::local("Champaign", "Illinois", "IL", "US")),
    ("448", Row::local("Pensacola", "Florida", "FL", "US")),
    ("450", Row::local("Granby", "Quebec", "QC", "Canada")),
    ("458", Row::local("Eugene", "Oregon", "OR", "US")),
    ("463", Row::local("Indianapolis", "Indiana", "IN", "US")),
    ("464", Row::local("Cicero", "Illinois", "IL", "US")),
    ("469", Row::local("Dallas", "Texas", "TX", "US")),
    ("470", Row::local("Atlanta", "Georgia", "GA", "US")),
    ("474", Row::local("Regina", "Saskatchewan", "SK", "Canada")),
    ("475", Row::local("New Haven", "Connecticut", "CT", "US")),
    ("478", Row::local("Macon", "Georgia", "GA", "US")),
    ("479", Row::local("Fort Smith", "Arkansas", "AR", "US")),
    ("480", Row::local("Mesa", "Arizona", "AZ", "US")),
    ("484", Row::local("Allentown", "Pennsylvania", "PA", "US")),
    ("501", Row::local("Little Rock", "Arkansas", "AR", "US")),
    ("502", Row::local("Louisville", "Kentucky", "KY", "US")),
    ("503", Row::local("Portland", "Oregon", "OR", "US")),
    ("504", Row::local("New Orleans", "Louisiana", "LA", "US")),
    ("505", Row::local("Albuquerque", "New Mexico", "NM", "US")),
    ("506", Row::local("Moncton", "New Brunswick", "NB", "Canada")),
    ("507", Row::local("Rochester", "Minnesota", "MN", "US")),
    ("508", Row::local("Worcester", "Massachusetts", "MA", "US")),
    ("509", Row::local("Spokane", "Washington", "WA", "US")),
    ("510", Row::local("Oakland", "California", "CA", "US")),
    ("512", Row::local("Austin", "Texas", "TX", "US")),
    ("513", Row::local("Cincinnati", "Ohio", "OH", "US")),
    ("514", Row::local("Montreal", "Quebec", "QC", "Canada")),
    ("515", Row::local("Des Moines", "Iowa", "IA", "US")),
    ("516", Row::local("Hempstead", "New York", "NY", "US")),
    ("517", Row::local("Lansing", "Michigan", "MI", "US")),
    ("518", Row::local("Albany", "New York", "NY", "US")),
    ("519", Row::local("London", "Ontario", "ON", "Canada")),
    ("520", Row::local("Tucson", "Arizona", "AZ", "US")),
    ("530", Row::local("Redding", "California", "CA", "US")),
    ("531", Row::local("Omaha", "Nebraska", "NE", "US")),
    ("534", Row::local("Eau Claire", "Wisconsin", "WI", "US")),
    ("539", Row::local("Tulsa", "Oklahoma", "OK", "US")),
    ("540", Row::local("Roanoke", "Virginia", "VA", "US")),
    ("541", Row::local("Eugene", "Oregon", "OR", "US")),
    ("548", Row::local("London", "Ontario", "ON", "Canada")),
    ("551", Row::local("Jersey City", "New Jersey", "NJ", "US")),
    ("557", Row::local("St. Louis", "Missouri", "MO", "US")),
    ("559", Row::local("Fresno", "California", "CA", "US")),
    ("561", Row::local("West Palm Beach", "Florida", "FL", "US")),
    ("562", Row::local("Long Beach", "California", "CA", "US")),
    ("563", Row::local("Davenport", "Iowa", "IA", "US")),
    ("564", Row::local("Vancouver", "Washington", "WA", "US")),
    ("567", Row::local("Toledo", "Ohio", "OH", "US")),
    ("570", Row::local("Scranton", "Pennsylvania", "PA", "US")),
    ("571", Row::local("Arlington", "Virginia", "VA", "US")),
    ("572", Row::local("Oklahoma City", "Oklahoma", "OK", "US")),
    ("573", Row::local("Columbia", "Missouri", "MO", "US")),
    ("574", Row::local("South Bend", "Indiana", "IN", "US")),
    ("575", Row::local("Las Cruces", "New Mexico", "NM", "US")),
    ("579", Row::local("Granby", "Quebec", "QC", "Canada")),
    ("580", Row::local("Lawton", "Oklahoma", "OK", "US")),
    ("581", Row::local("Quebec City", "Quebec", "QC", "Canada")),
    ("585", Row::local("Rochester", "New York", "NY", "US")),
    ("586", Row::local("Warren", "Michigan", "MI", "US")),
    ("587", Row::local("Edmonton", "Alberta", "AB", "Canada")),
    ("601", Row::local("Jackson", "Mississippi", "MS", "US")),
    ("602", Row::local("Phoenix", "Arizona", "AZ", "US")),
    ("603", Row::local("Manchester", "New Hampshire", "NH", "US")),
    ("604", Row::local("Vancouver", "British Columbia", "BC", "Canada")),
    ("605", Row::local("Sioux Falls", "South Dakota", "SD", "US")),
    ("606", Row::local("Ashland", "Kentucky", "KY", "US")),
    ("607", Row::local("Binghamton", "New York", "NY", "US")),
    ("608", Row::local("Madison", "Wisconsin", "WI", "US")),
    ("609", Row::local("Trenton", "New Jersey", "NJ", "US")),
    ("610", Row::local("Allentown", "Pennsylvania", "PA", "US")),
    ("612", Row::local("Minneapolis", "Minnesota", "MN", "US")),
    ("613", Row::local("Ottawa", "Ontario", "ON", "Canada")),
    ("614", Row::local("Columbus", "Ohio", "OH", "US")),
    ("615", Row::local("Nashville", "Tennessee", "TN", "US")),
    ("616", Row::local("Grand Rapids", "Michigan", "MI", "US")),
    ("617", Row::local("Boston", "Massachusetts", "MA", "US")),
    ("618", Row::local("Belleville", "Illinois", "IL", "US")),
    ("619", Row::local("San Diego", "California", "CA", "US")),
    ("620", Row::local("Hutchinson", "Kansas", "KS", "US")),
    ("623", Row::local("Glendale", "Arizona", "AZ", "US")),
    ("626", Row::local("Pasadena", "California", "CA", "US")),
    ("628", Row::local("San Francisco", "California", "CA", "US")),
    ("629", Row::local("Nashville", "Tennessee", "TN", "US")),
    ("630", Row::local("Aurora", "Illinois", "IL", "US")),
    ("631", Row::local("Islip", "New York", "NY", "US")),
    ("636", Row::local("O'Fallon", "Missouri", "MO", "US")),
    ("639", Row::local("Saskatoon", "Saskatchewan", "SK", "Canada")),
    ("640", Row::local("Trenton", "New Jersey", "NJ", "US")),
    ("641", Row::local("Mason City", "Iowa", "IA", "US")),
    ("646", Row::local("New York City", "New York", "NY", "US")),
    ("647", Row::local("Toronto", "Ontario", "ON", "Canada")),
    ("650", Row::local("San Mateo", "California", "CA", "US")),
    ("651", Row::local("St. Paul", "Minnesota", "MN", "US")),
    ("656", Row::local("Tampa", "Florida", "FL", "US")),
    ("657", Row::local("Anaheim", "California", "CA", "US")),
    ("659", Row::local("Birmingham", "Alabama", "AL", "US")),
    ("660", Row::local("Sedalia", "Missouri", "MO", "US")),
    ("661", Row::local("Bakersfield", "California", "CA", "US")),
    ("662", Row::local("Tupelo", "Mississippi", "MS", "US")),
    ("667", Row::local("Baltimore", "Maryland", "MD", "US")),
    ("669", Row::local("San Jose", "California", "CA", "US")),
    ("670", Row::local("Saipan", "Northern Mariana Islands", "MP", "US")),
    ("671", Row::local("Hagatna", "Guam", "GU", "US")),
    ("672", Row::local("Vancouver", "British Columbia", "BC", "Canada")),
    ("678", Row::local("Atlanta", "Georgia", "GA", "US")),
    ("679", Row::local("Dearborn", "Michigan", "MI", "US")),
    ("680", Row::local("Syracuse", "New York", "NY", "US")),
    ("681", Row::local("Charleston", "West Virginia", "WV", "US")),
    ("682", Row::local("Fort Worth", "Texas", "TX", "US")),
    ("683", Row::local("Sudbury", "Ontario", "ON", "Canada")),
    ("684", Row::local("Pago Pago", "American Samoa", "AS", "US")),
    ("689", Row::local("Orlando", "Florida", "FL", "US")),
    ("701", Row::local("Fargo", "North Dakota", "ND", "US")),
    ("702", Row::local("Las Vegas", "Nevada", "NV", "US")),
    ("703", Row::local("Arlington", "Virginia", "VA", "US")),
    ("704", Row::local("Charlotte", "North Carolina", "NC", "US")),
    ("705", Row::local("Sudbury", "Ontario", "ON", "Canada")),
    ("706", Row::local("Augusta", "Georgia", "GA", "US")),
    ("707", Row::local("Santa Rosa", "California", "CA", "US")),
    ("708", Row::local("Cicero", "Illinois", "IL", "US")),
    ("709", Row::local("St. John's", "Newfoundland and Labrador", "NL", "Canada")),
    ("712", Row::local("Sioux City", "Iowa", "IA", "US")),
    ("713", Row::local("Houston", "Texas", "TX", "US")),
    ("714", Row::local("Anaheim", "California", "CA", "US")),
    ("715", Row::local("Eau Claire", "Wisconsin", "WI", "US")),
    ("716", Row::local("Buffalo", "New York", "NY", "US")),
    ("717", Row::local("Lancaster", "Pennsylvania", "PA", "US")),
    ("718", Row::local("New York City", "New York", "NY", "US")),
    ("719", Row::local("Colorado Springs", "Colorado", "CO", "US")),
    ("720", Row::local("Denver", "Colorado", "CO", "US")),
    ("724", Row::local("New Castle", "Pennsylvania", "PA", "US")),
    ("725", Row::local("Las Vegas", "Nevada", "NV", "US")),
    ("726", Row::local("San Antonio", "Texas", "TX", "US")),
    ("727", Row::local("St. Petersburg", "Florida", "FL", "US")),
    ("731", Row::local("Jackson", "Tennessee", "TN", "US")),
    ("732", Row::local("Toms River", "New Jersey", "NJ", "US")),
    ("734", Row::local("Ann Arbor", "Michigan", "MI", "US")),
    ("737", Row::local("Austin", "Texas", "TX", "US")),
    ("740", Row::local("Newark", "Ohio", "OH", "US")),
    ("742", Row::local("Hamilton", "Ontario", "ON", "Canada")),
    ("743", Row::local("Greensboro", "North Carolina", "NC", "US")),
    ("747", Row::local("Burbank", "California", "CA", "US")),
    ("753", Row::local("Ottawa", "Ontario", "ON", "Canada")),
    ("754", Row::local("Fort Lauderdale", "Florida", "FL", "US")),
    ("757", Row::local("Virginia Beach", "Virginia", "VA", "US")),
    ("760", Row::local("Oceanside", "California", "CA", "US")),
    ("762", Row::local("Augusta", "Georgia", "GA", "US")),
    ("763", Row::local("Brooklyn Park", "Minnesota", "MN", "US")),
    ("765", Row::local("Lafayette", "Indiana", "IN", "US")),
    ("769", Row::local("Jackson", "Mississippi", "MS", "US")),
    ("770", Row::local("Marietta", "Georgia", "GA", "US")),
    ("772", Row::local("Port St. Lucie", "Florida", "FL", "US")),
    ("773", Row::local("Chicago", "Illinois", "IL", "US")),
    ("774", Row::local("Worcester", "Massachusetts", "MA", "US")),
    ("775", Row::local("Reno", "Nevada", "NV", "US")),
    ("778", Row::local("Vancouver", "British Columbia", "BC", "Canada")),
    ("779", Row::local("Rockford", "Illinois", "IL", "US")),
    ("780", Row::local("Edmonton", "Alberta", "AB", "Canada")),
    ("781", Row::local("Lynn", "Massachusetts", "MA", "US")),
    ("782", Row::local("Halifax", "Nova Scotia", "NS", "Canada")),
    ("785", Row::local("Topeka", "Kansas", "KS", "US")),
    ("786", Row::local("Miami", "Florida", "FL", "US")),
    ("787", Row::local("San Juan", "Puerto Rico", "PR", "US")),
    ("800", Row::NonGeographic),
    ("801", Row::local("Salt Lake City", "Utah", "UT", "US")),
    ("802", Row::local("Burlington", "Vermont", "VT", "US")),
    ("803", Row::local("Columbia", "South Carolina", "SC", "US")),
    ("804", Row::local("Richmond", "Virginia", "VA", "US")),
    ("805", Row::local("Santa Barbara", "California", "CA", "US")),
    ("806", Row::local("Lubbock", "Texas", "TX", "US")),
    ("807", Row::local("Thunder Bay", "Ontario", "ON", "Canada")),
    ("808", Row::local("Honolulu", "Hawaii", "HI", "US")),
    ("810", Row::local("Flint", "Michigan", "MI", "US")),
    ("812", Row::local("Evansville", "Indiana", "IN", "US")),
    ("813", Row::local("Tampa", "Florida", "FL", "US")),
    ("814", Row::local("Erie", "Pennsylvania", "PA", "US")),
    ("815", Row::local("Rockford", "Illinois", "IL", "US")),
    ("816", Row::local("Kansas City", "Missouri", "MO", "US")),
    ("817", Row::local("Fort Worth", "Texas", "TX", "US")),
    ("818", Row::local("Burbank", "California", "CA", "US")),
    ("819", Row::local("Sherbrooke", "Quebec", "QC", "Canada")),
    ("820", Row::local("Santa Barbara", "California", "CA", "US")),
    ("825", Row::local("Calgary", "Alberta", "AB", "Canada")),
    ("826", Row::local("Roanoke", "Virginia", "VA", "US")),
    ("828", Row::local("Asheville", "North Carolina", "NC", "US")),
    ("830", Row::local("New Braunfels", "Texas", "TX", "US")),
    ("831", Row::local("Salinas", "California", "CA", "US")),
    ("832", Row::local("Houston", "Texas", "TX", "US")),
    ("833", Row::NonGeographic),
    ("835", Row::local("Allentown", "Pennsylvania", "PA", "US")),
    ("838", Row::local("Albany", "New York", "NY", "US")),
    ("839", Row::local("Columbia", "South Carolina", "SC", "US")),
    ("840", Row::local("San Bernardino", "California", "CA", "US")),
    ("843", Row::local("Charleston", "South Carolina", "SC", "US")),
    ("844", Row::NonGeographic),
    ("845", Row::local("Poughkeepsie", "New York", "NY", "US")),
    ("847", Row::local("Evanston", "Illinois", "IL", "US")),
    ("848", Row::local("Toms River", "New Jersey", "NJ", "US")),
    ("850", Row::local("Tallahassee", "Florida", "FL", "US")),
    ("854", Row::local("Charleston", "South Carolina", "SC", "US")),
    ("855", Row::NonGeographic),
    ("856", Row::local("Camden", "New Jersey", "NJ", "US")),
    ("857", Row::local("Boston", "Massachusetts", "MA", "US")),
    ("858", Row::local("San Diego", "California", "CA", "US")),
    ("859", Row::local("Lexington", "Kentucky", "KY", "US")),
    ("860", Row::local("Hartford", "Connecticut", "CT", "US")),
    ("862", Row::local("Newark", "New Jersey", "NJ", "US")),
    ("863", Row::local("Lakeland", "Florida", "FL", "US")),
    ("864", Row::local("Greenville", "South Carolina", "SC", "US")),
    ("865", Row::local("Knoxville", "Tennessee", "TN", "US")),
    ("866", Row::NonGeographic),
    ("867", Row::local("Whitehorse", "Yukon", "YT", "Canada")),
    ("870", Row::local("Jonesboro", "Arkansas", "AR", "US")),
    ("872", Row::local("Chicago", "Illinois", "IL", "US")),
    ("873", Row::local("Sherbrooke", "Quebec", "QC", "Canada")),
    ("877", Row::NonGeographic),
    ("878", Row::local("Pittsburgh", "Pennsylvania", "PA", "US")),
    ("888", Row::NonGeographic),
    ("900", Row::NonGeographic),
    ("901", Row::local("Memphis", "Tennessee", "TN", "US")),
    ("902", Row::local("Halifax", "Nova Scotia", "NS", "Canada")),
    ("903", Row::local("Tyler", "Texas", "TX", "US")),
    ("904", Row::local("Jacksonville", "Florida", "FL", "US")),
    ("905", Row::local("Hamilton", "Ontario", "ON", "Canada")),
    ("906", Row::local("Marquette", "Michigan", "MI", "US")),
    ("907", Row::local("Anchorage", "Alaska", "AK", "US")),
    ("908", Row::local("Elizabeth", "New Jersey", "NJ", "US")),
    ("909", Row::local("San Bernardino", "California", "CA", "US")),
    ("910", Row::local("Fayetteville", "North Carolina", "NC", "US")),
    ("912", Row::local("Savannah", "Georgia", "GA", "US")),
    ("913", Row::local("Kansas City", "Kansas", "KS", "US")),
    ("914", Row::local("Yonkers", "New York", "NY", "US")),
    ("915", Row::local("El Paso", "Texas", "TX", "US")),
    ("916", Row::local("Sacramento", "California", "CA", "US")),
    ("917", Row::local("New York City", "New York", "NY", "US")),
    ("918", Row::local("Tulsa", "Oklahoma", "OK", "US")),
    ("919", Row::local("Raleigh", "North Carolina", "NC", "US")),
    ("920", Row::local("Green Bay", "Wisconsin", "WI", "US")),
    ("925", Row::local("Concord", "California", "CA", "US")),
    ("928", Row::local("Flagstaff", "Arizona", "AZ", "US")),
    ("929", Row::local("New York City", "New York", "NY", "US")),
    ("930", Row::local("Evansville", "Indiana", "IN", "US")),
    ("931", Row::local("Clarksville", "Tennessee", "TN", "US")),
    ("934", Row::local("Islip", "New York", "NY", "US")),
    ("936", Row::local("Conroe", "Texas", "TX", "US")),
    ("937", Row::local("Dayton", "Ohio", "OH", "US")),
    ("938", Row::local("Huntsville", "Alabama", "AL", "US")),
    ("939", Row::local("San Juan", "Puerto Rico", "PR", "US")),
    ("940", Row::local("Denton", "Texas", "TX", "US")),
    ("941", Row::local("Sarasota", "Florida", "FL", "US")),
    ("943", Row::local("Atlanta", "Georgia", "GA", "US")),
    ("945", Row::local("Dallas", "Texas", "TX", "US")),
    ("947", Row::local("Troy", "Michigan", "MI", "US")),
    ("948", Row::local("Virginia Beach", "Virginia", "VA", "US")),
    ("949", Row::local("Irvine", "California", "CA", "US")),
    ("951", Row::local("Riverside", "California", "CA", "US")),
    ("952", Row::local("Bloomington", "Minnesota", "MN", "US")),
    ("954", Row::local("Fort Lauderdale", "Florida", "FL", "US")),
    ("956", Row::local("Laredo", "Texas", "TX", "US")),
    ("959", Row::local("Hartford", "Connecticut", "CT", "US")),
    ("970", Row::local("Fort Collins", "Colorado", "CO", "US")),
    ("971", Row::local("Portland", "Oregon", "OR", "US")),
    ("972", Row::local("Dallas", "Texas", "TX", "US")),
    ("973", Row::local("Newark", "New Jersey", "NJ", "US")),
    ("978", Row::local("Lowell", "Massachusetts", "MA", "US")),
    ("979", Row::local("College Station", "Texas", "TX", "US")),
    ("980", Row::local("Charlotte", "North Carolina", "NC", "US")),
    ("983", Row::local("Denver", "Colorado", "CO", "US")),
    ("984", Row::local("Raleigh", "North Carolina", "NC", "US")),
    ("985", Row::local("Houma", "Louisiana", "LA", "US")),
    ("986", Row::local("Boise", "Idaho", "ID", "US")),
    ("989", Row::local("Saginaw", "Michigan", "MI", "US")),
];
