/// SQL schema for the Fakebook dataset
/// Creates all tables with keys, foreign keys, and the indexes used by loading
pub const SCHEMA: &str = r#"
-- Users table
CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    year_of_birth INTEGER NOT NULL,
    month_of_birth INTEGER CHECK(month_of_birth BETWEEN 1 AND 12),
    day_of_birth INTEGER CHECK(day_of_birth BETWEEN 1 AND 31),
    gender TEXT NOT NULL
);

-- Friends table (one row per pair, smaller id first)
CREATE TABLE IF NOT EXISTS friends (
    user1_id INTEGER NOT NULL,
    user2_id INTEGER NOT NULL,
    PRIMARY KEY (user1_id, user2_id),
    CHECK (user1_id < user2_id),
    FOREIGN KEY (user1_id) REFERENCES users(user_id) ON DELETE CASCADE,
    FOREIGN KEY (user2_id) REFERENCES users(user_id) ON DELETE CASCADE
);

-- Friend lookups from either side
CREATE INDEX IF NOT EXISTS idx_friends_user1 ON friends(user1_id);
CREATE INDEX IF NOT EXISTS idx_friends_user2 ON friends(user2_id);

-- Cities table
CREATE TABLE IF NOT EXISTS cities (
    city_id INTEGER PRIMARY KEY,
    city_name TEXT NOT NULL,
    state_name TEXT NOT NULL,
    country_name TEXT
);

-- Current and hometown cities (at most one row per user)
CREATE TABLE IF NOT EXISTS user_current_cities (
    user_id INTEGER PRIMARY KEY,
    current_city_id INTEGER NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE,
    FOREIGN KEY (current_city_id) REFERENCES cities(city_id)
);

CREATE TABLE IF NOT EXISTS user_hometown_cities (
    user_id INTEGER PRIMARY KEY,
    hometown_city_id INTEGER NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE,
    FOREIGN KEY (hometown_city_id) REFERENCES cities(city_id)
);

-- Education
CREATE TABLE IF NOT EXISTS programs (
    program_id INTEGER PRIMARY KEY,
    institution TEXT NOT NULL,
    concentration TEXT NOT NULL,
    degree TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS education (
    user_id INTEGER NOT NULL,
    program_id INTEGER NOT NULL,
    program_year INTEGER NOT NULL,
    PRIMARY KEY (user_id, program_id),
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE,
    FOREIGN KEY (program_id) REFERENCES programs(program_id)
);

-- Events
CREATE TABLE IF NOT EXISTS user_events (
    event_id INTEGER PRIMARY KEY,
    event_creator_id INTEGER NOT NULL,
    event_name TEXT NOT NULL,
    event_tagline TEXT,
    event_host TEXT,
    event_city_id INTEGER NOT NULL,
    FOREIGN KEY (event_creator_id) REFERENCES users(user_id) ON DELETE CASCADE,
    FOREIGN KEY (event_city_id) REFERENCES cities(city_id)
);

CREATE INDEX IF NOT EXISTS idx_user_events_city ON user_events(event_city_id);

-- Albums and photos
CREATE TABLE IF NOT EXISTS albums (
    album_id INTEGER PRIMARY KEY,
    album_owner_id INTEGER NOT NULL,
    album_name TEXT NOT NULL,
    FOREIGN KEY (album_owner_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS photos (
    photo_id INTEGER PRIMARY KEY,
    album_id INTEGER NOT NULL,
    photo_link TEXT NOT NULL,
    photo_caption TEXT,
    FOREIGN KEY (album_id) REFERENCES albums(album_id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_photos_album ON photos(album_id);

-- Tags (a user tagged in a photo)
CREATE TABLE IF NOT EXISTS tags (
    tag_photo_id INTEGER NOT NULL,
    tag_subject_id INTEGER NOT NULL,
    PRIMARY KEY (tag_photo_id, tag_subject_id),
    FOREIGN KEY (tag_photo_id) REFERENCES photos(photo_id) ON DELETE CASCADE,
    FOREIGN KEY (tag_subject_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_tags_subject ON tags(tag_subject_id);
"#;

/// Sample dataset for development and tests
pub const TEST_DATA: &str = r#"
INSERT OR IGNORE INTO users (user_id, first_name, last_name, year_of_birth, month_of_birth, day_of_birth, gender) VALUES
    (1, 'Alice', 'Smith', 1990, 1, 15, 'female'),
    (2, 'Bob', 'Smith', 1992, 3, 2, 'male'),
    (3, 'Carol', 'Jones', 1991, 1, 20, 'female'),
    (4, 'Dave', 'Smith', 1995, 3, 10, 'male'),
    (5, 'Eve', 'Brown', 1990, 7, 7, 'female'),
    (6, 'Frank', 'Jones', 1988, NULL, NULL, 'male'),
    (7, 'Alice', 'Green', 1993, 3, 30, 'female'),
    (8, 'Christopher', 'Lee', 1985, 12, 1, 'male');

INSERT OR IGNORE INTO friends (user1_id, user2_id) VALUES
    (1, 2),
    (1, 3),
    (1, 5),
    (2, 4),
    (3, 4),
    (5, 8);

INSERT OR IGNORE INTO cities (city_id, city_name, state_name, country_name) VALUES
    (1, 'Ann Arbor', 'Michigan', 'United States'),
    (2, 'Detroit', 'Michigan', 'United States'),
    (3, 'Chicago', 'Illinois', 'United States'),
    (4, 'Columbus', 'Ohio', 'United States');

INSERT OR IGNORE INTO user_current_cities (user_id, current_city_id) VALUES
    (1, 1),
    (2, 2),
    (3, 3),
    (4, 2),
    (5, 1);

INSERT OR IGNORE INTO user_hometown_cities (user_id, hometown_city_id) VALUES
    (1, 1),
    (2, 2),
    (3, 1),
    (4, 2),
    (6, 3);

INSERT OR IGNORE INTO programs (program_id, institution, concentration, degree) VALUES
    (1, 'University of Michigan', 'Computer Science', 'BSE');

INSERT OR IGNORE INTO education (user_id, program_id, program_year) VALUES
    (1, 1, 2012);

INSERT OR IGNORE INTO user_events (event_id, event_creator_id, event_name, event_tagline, event_host, event_city_id) VALUES
    (1, 1, 'Event 1', NULL, NULL, 1),
    (2, 1, 'Event 2', NULL, NULL, 2),
    (3, 1, 'Event 3', NULL, NULL, 3),
    (4, 1, 'Event 4', NULL, NULL, 4),
    (5, 1, 'Event 5', NULL, NULL, 3);

INSERT OR IGNORE INTO albums (album_id, album_owner_id, album_name) VALUES
    (100, 1, 'Summer'),
    (101, 3, 'Graduation');

INSERT OR IGNORE INTO photos (photo_id, album_id, photo_link, photo_caption) VALUES
    (10, 100, 'https://photos.example.com/10', NULL),
    (11, 100, 'https://photos.example.com/11', NULL),
    (12, 101, 'https://photos.example.com/12', NULL),
    (13, 101, 'https://photos.example.com/13', NULL);

INSERT OR IGNORE INTO tags (tag_photo_id, tag_subject_id) VALUES
    (10, 1),
    (10, 3),
    (10, 5),
    (11, 1),
    (11, 3),
    (11, 5),
    (12, 2),
    (12, 4),
    (12, 1),
    (12, 7);
"#;
