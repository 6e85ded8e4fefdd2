/*
SPDX-License-Identifier: MIT OR Apache-2.0
*/

//! Closed value sets used by references.

str_enum! {
    /// The kind of work a reference points to.
    pub enum ReferenceType("reference type") {
        Art = "art",
        Article = "article",
        Audiovisual = "audiovisual",
        Bill = "bill",
        Blog = "blog",
        Book = "book",
        Catalogue = "catalogue",
        Conference = "conference",
        ConferencePaper = "conference-paper",
        Data = "data",
        Database = "database",
        Dictionary = "dictionary",
        EditedWork = "edited-work",
        Encyclopedia = "encyclopedia",
        FilmBroadcast = "film-broadcast",
        Generic = "generic",
        GovernmentDocument = "government-document",
        Grant = "grant",
        Hearing = "hearing",
        HistoricalWork = "historical-work",
        LegalCase = "legal-case",
        LegalRule = "legal-rule",
        MagazineArticle = "magazine-article",
        Manual = "manual",
        Map = "map",
        Multimedia = "multimedia",
        Music = "music",
        NewspaperArticle = "newspaper-article",
        Pamphlet = "pamphlet",
        Patent = "patent",
        PersonalCommunication = "personal-communication",
        Proceedings = "proceedings",
        Report = "report",
        Serial = "serial",
        Slides = "slides",
        Software = "software",
        SoftwareCode = "software-code",
        SoftwareContainer = "software-container",
        SoftwareExecutable = "software-executable",
        SoftwareVirtualMachine = "software-virtual-machine",
        SoundRecording = "sound-recording",
        Standard = "standard",
        Statute = "statute",
        Thesis = "thesis",
        Unpublished = "unpublished",
        Video = "video",
        Website = "website",
    }
}

str_enum! {
    /// Publication status of a work that has not (yet) been published in final form.
    pub enum ReferenceStatus("reference status") {
        InPreparation = "in-preparation",
        Abstract = "abstract",
        Submitted = "submitted",
        InPress = "in-press",
        AdvanceOnline = "advance-online",
        Preprint = "preprint",
    }
}
