//! Provides the `Disc` record: an (artist, album) pair.

/// A `Disc` is a music disc identified by its artist and album title.
///
/// Two discs are equal exactly when both fields are equal, byte for byte, so
/// `"Queen"` and `"queen"` name different artists. Neither field is checked
/// for emptiness.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Disc {
    artist: String,
    album: String,
}

impl Disc {
    /// Creates a disc for `album` by `artist`.
    #[must_use]
    pub fn new(artist: impl Into<String>, album: impl Into<String>) -> Self {
        Disc { artist: artist.into(), album: album.into() }
    }

    /// The artist's name
    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// The album's title
    #[must_use]
    pub fn album(&self) -> &str {
        &self.album
    }

    /// Overwrites the artist's name in place.
    pub fn update_artist(&mut self, artist: impl Into<String>) {
        self.artist = artist.into();
    }

    /// Overwrites the album's title in place.
    pub fn update_album(&mut self, album: impl Into<String>) {
        self.album = album.into();
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for Disc {
    fn from((artist, album): (A, B)) -> Self {
        Disc::new(artist, album)
    }
}
